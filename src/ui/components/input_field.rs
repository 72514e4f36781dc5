//! Input Field Component
//!
//! A labeled text input or option picker with focus handling and inline
//! error display. Short terminals get a one-line variant.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Whether the value is picked from options rather than typed
    pub is_choice: bool,
    /// Optional error message to display below the input
    pub error: Option<&'a str>,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_choice: false,
            error: None,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Render as an option picker: arrows instead of a cursor.
    pub fn choice(mut self, is_choice: bool) -> Self {
        self.is_choice = is_choice;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Placeholder text. An empty string means none.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = (!placeholder.is_empty()).then_some(placeholder);
        self
    }

    fn shows_placeholder(&self) -> bool {
        self.value.is_empty() && self.placeholder.is_some()
    }

    /// Text inside the box, with the cursor or picker arrows.
    fn content(&self) -> String {
        let text = if self.shows_placeholder() {
            self.placeholder.unwrap_or_default()
        } else {
            self.value
        };

        match (self.focused, self.is_choice) {
            (true, true) => format!("\u{25C0} {text} \u{25B6}"),
            (true, false) if self.shows_placeholder() => format!("\u{2588}{text}"),
            (true, false) => format!("{text}\u{2588}"),
            (false, _) => text.to_string(),
        }
    }

    fn text_style(&self) -> Style {
        if self.shows_placeholder() {
            Style::default().fg(COLOR_DIM)
        } else if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

/// Calculate the height needed for an input field
///
/// Returns the number of rows needed:
/// - 1 for label
/// - 3 for input box (border + content + border), or 0 on short terminals
///   where label and value share one row
/// - 1 for error (if present)
pub fn calculate_input_field_height(config: &InputFieldConfig, ctx: &LayoutContext) -> u16 {
    let base = if ctx.is_short() { 1 } else { 4 };
    base + u16::from(config.error.is_some())
}

/// Render an input field with label, input box, and optional error
///
/// Anything that would fall outside `area` is skipped.
///
/// # Returns
/// The height consumed by this input field
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    config: &InputFieldConfig,
    ctx: &LayoutContext,
) -> u16 {
    let row = |offset: u16, height: u16| -> Option<Rect> {
        let rect = Rect {
            x: area.x + 2,
            y: area.y + offset,
            width: area.width.saturating_sub(4),
            height,
        };
        (rect.bottom() <= area.bottom() && rect.width > 0).then_some(rect)
    };

    let label_style = if config.focused {
        Style::default().fg(COLOR_ACTIVE)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let mut y_offset = 0;

    if ctx.is_short() {
        if let Some(rect) = row(0, 1) {
            let marker = if config.focused { "\u{25B6} " } else { "  " };
            let line = Line::from(vec![
                Span::styled(format!("{marker}{}: ", config.label), label_style),
                Span::styled(config.content(), config.text_style()),
            ]);
            frame.render_widget(Paragraph::new(line), rect);
        }
        y_offset += 1;
    } else {
        if let Some(rect) = row(0, 1) {
            let label = Paragraph::new(Line::from(Span::styled(config.label, label_style)));
            frame.render_widget(label, rect);
        }
        y_offset += 1;

        if let Some(rect) = row(y_offset, 3) {
            let border_color = if config.focused {
                Color::White
            } else {
                COLOR_BORDER
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .style(Style::default().bg(COLOR_INPUT_BG));
            let input = Paragraph::new(Line::from(Span::styled(
                config.content(),
                config.text_style(),
            )))
            .block(block);
            frame.render_widget(input, rect);
        }
        y_offset += 3;
    }

    if let Some(error) = config.error {
        if let Some(rect) = row(y_offset, 1) {
            let error_text = Paragraph::new(Line::from(vec![
                Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
                Span::styled(error, Style::default().fg(COLOR_ERROR)),
            ]));
            frame.render_widget(error_text, rect);
        }
        y_offset += 1;
    }

    y_offset
}

// ============================================================================
// Tests
// ============================================================================
