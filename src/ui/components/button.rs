//! Button Component
//!
//! A bracketed label like `[ Save ]` that registers itself as a hit area.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM, COLOR_ERROR, COLOR_LINK};

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Secondary,
    Link,
    Danger,
}

impl ButtonKind {
    fn style(self) -> Style {
        match self {
            ButtonKind::Primary => Style::default()
                .fg(COLOR_ACTIVE)
                .add_modifier(Modifier::BOLD),
            ButtonKind::Secondary => Style::default().fg(COLOR_DIM),
            ButtonKind::Link => Style::default().fg(COLOR_LINK),
            ButtonKind::Danger => Style::default().fg(COLOR_ERROR),
        }
    }
}

/// A clickable bracketed label.
#[derive(Debug, Clone, Copy)]
pub struct Button<'a> {
    pub label: &'a str,
    pub kind: ButtonKind,
    pub action: ClickAction,
    /// `[ Save ]` rather than `[Save]`
    pub padded: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, action: ClickAction) -> Self {
        Self {
            label,
            kind: ButtonKind::Secondary,
            action,
            padded: false,
        }
    }

    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn padded(mut self) -> Self {
        self.padded = true;
        self
    }

    fn text(&self) -> String {
        if self.padded {
            format!("[ {} ]", self.label)
        } else {
            format!("[{}]", self.label)
        }
    }

    /// Columns taken by the button.
    pub fn width(&self) -> u16 {
        self.text().width() as u16
    }

    /// Draw the button at `(x, y)` and register its hit area.
    ///
    /// Returns the rect it occupies, clipped to `bounds`. Nothing is drawn
    /// when the button would start outside `bounds`.
    pub fn render(
        &self,
        frame: &mut Frame,
        bounds: Rect,
        (x, y): (u16, u16),
        registry: &mut HitAreaRegistry,
    ) -> Rect {
        let rect = Rect {
            x,
            y,
            width: self.width(),
            height: 1,
        }
        .intersection(bounds);
        if rect.is_empty() {
            return rect;
        }

        let base = self.kind.style();
        let hover = base.fg(COLOR_ACCENT).add_modifier(Modifier::REVERSED);
        registry.register(rect, self.action, Some(hover));
        let style = registry.get_hover_style(rect).unwrap_or(base);

        frame.render_widget(Paragraph::new(Span::styled(self.text(), style)), rect);
        rect
    }
}
