//! Tab Selector Component
//!
//! A horizontal tab selector using a `▶` marker for the selected item, with
//! short labels on compact terminals.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACTIVE, COLOR_DIM};

/// Leading padding before the first tab.
const LEAD: &str = "  ";

/// Marker column in front of every tab; `▶ ` when selected.
const MARKER_WIDTH: u16 = 2;

/// A single tab item in the selector
#[derive(Debug, Clone, Copy)]
pub struct TabItem<'a> {
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            short_label: label,
        }
    }

    pub fn with_short_label(label: &'a str, short_label: &'a str) -> Self {
        Self { label, short_label }
    }

    fn label_for(&self, ctx: &LayoutContext) -> &'a str {
        if ctx.is_compact() {
            self.short_label
        } else {
            self.label
        }
    }
}

fn spacing(ctx: &LayoutContext) -> &'static str {
    if ctx.is_extra_small() {
        "  "
    } else {
        "    "
    }
}

/// Render a horizontal tab selector
///
/// # Example
/// ```ignore
/// let items = [TabItem::new("Dashboard"), TabItem::with_short_label("Appointments", "Appts")];
/// let line = render_tab_selector(&items, 0, true, &ctx);
/// ```
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected: usize,
    focused: bool,
    ctx: &LayoutContext,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(LEAD)];

    for (idx, item) in items.iter().enumerate() {
        let label = item.label_for(ctx);

        if idx == selected {
            let marker_style = if focused {
                Style::default()
                    .fg(COLOR_ACTIVE)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            let text_style = Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD);

            spans.push(Span::styled("▶ ", marker_style));
            spans.push(Span::styled(label.to_string(), text_style));
        } else {
            let text_style = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ", text_style));
            spans.push(Span::styled(label.to_string(), text_style));
        }

        if idx + 1 < items.len() {
            spans.push(Span::raw(spacing(ctx)));
        }
    }

    Line::from(spans)
}

/// Column offset and width of each tab (marker included) within the line
/// built by [`render_tab_selector`].
pub fn tab_positions(items: &[TabItem<'_>], ctx: &LayoutContext) -> Vec<(u16, u16)> {
    let gap = spacing(ctx).width() as u16;
    let mut x = LEAD.width() as u16;

    items
        .iter()
        .map(|item| {
            let width = MARKER_WIDTH + item.label_for(ctx).width() as u16;
            let position = (x, width);
            x += width + gap;
            position
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
