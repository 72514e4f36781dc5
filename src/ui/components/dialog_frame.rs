//! Dialog Frame Component
//!
//! A centered dialog frame with rounded borders. Handles background clearing
//! and responsive sizing.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_HEADER};

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    /// Minimum width
    pub min_width: u16,
    /// Maximum width
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 60,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Calculate dialog width based on terminal size and configuration
fn calculate_dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig, area_width: u16) -> u16 {
    let width = if ctx.is_extra_small() {
        // Extra small: take most of the screen width, leave 2 cols margin
        area_width.saturating_sub(4).min(config.max_width)
    } else if ctx.is_narrow() {
        ctx.bounded_width(80, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(50, config.min_width, config.max_width)
    };
    width.min(area_width)
}

/// Outer rectangle of a dialog centered in `area`, borders included.
///
/// Never larger than `area`.
pub fn dialog_rect(area: Rect, ctx: &LayoutContext, config: &DialogFrameConfig) -> Rect {
    let width = calculate_dialog_width(ctx, config, area.width);
    let height = (config.content_height + 2).min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Render a dialog frame and return the inner content area
///
/// This function:
/// 1. Calculates responsive dimensions
/// 2. Centers the dialog on screen
/// 3. Clears the background
/// 4. Renders the border with title
/// 5. Returns the inner area for content
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let dialog_area = dialog_rect(area, ctx, config);

    frame.render_widget(Clear, dialog_area);

    let title = format!(" {} ", config.title);
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_frame_config_new() {
        let config = DialogFrameConfig::new("Test", 10);
        assert_eq!(config.title, "Test");
        assert_eq!(config.content_height, 10);
        assert_eq!(config.min_width, 30);
        assert_eq!(config.max_width, 60);
    }

    #[test]
    fn test_calculate_dialog_width_normal() {
        let ctx = LayoutContext::new(120, 40);
        let config = DialogFrameConfig::new("Test", 10);
        // 50% of 120 = 60, clamped to max 60
        assert_eq!(calculate_dialog_width(&ctx, &config, 120), 60);
    }

    #[test]
    fn test_calculate_dialog_width_extra_small() {
        let ctx = LayoutContext::new(50, 14);
        let config = DialogFrameConfig::new("Test", 10);
        assert_eq!(calculate_dialog_width(&ctx, &config, 50), 46);
    }

    #[test]
    fn test_dialog_rect_is_centered() {
        let ctx = LayoutContext::new(100, 40);
        let rect = dialog_rect(Rect::new(0, 0, 100, 40), &ctx, &DialogFrameConfig::new("T", 8));
        assert_eq!(rect, Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_dialog_rect_never_exceeds_area() {
        let ctx = LayoutContext::new(40, 10);
        let area = Rect::new(0, 0, 40, 10);
        let rect = dialog_rect(area, &ctx, &DialogFrameConfig::new("T", 30));
        assert_eq!(rect.height, 10);
        assert!(rect.width <= 40);
        assert_eq!(rect.intersection(area), rect);
    }
}
