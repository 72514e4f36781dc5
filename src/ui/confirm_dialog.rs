//! Yes/No dialog shown before a record is deleted.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Span,
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::components::{dialog_rect, render_dialog_frame, Button, ButtonKind, DialogFrameConfig};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme::COLOR_HEADER;
use crate::app::PendingDelete;

pub fn render_confirm_dialog(
    frame: &mut Frame,
    area: Rect,
    pending: &PendingDelete,
    ctx: &LayoutContext,
    registry: &mut HitAreaRegistry,
) {
    let prompt = pending.prompt();
    let config = DialogFrameConfig::new("Confirm Delete", 4).min_width(30).max_width(56);

    registry.register(area, ClickAction::DismissModal, None);
    registry.register(dialog_rect(area, ctx, &config), ClickAction::ModalBody, None);
    let inner = render_dialog_frame(frame, area, ctx, &config);
    if inner.height < 2 {
        return;
    }

    let prompt_area = Rect {
        height: inner.height - 1,
        ..inner
    };
    frame.render_widget(
        Paragraph::new(Span::styled(prompt, Style::default().fg(COLOR_HEADER)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        prompt_area,
    );

    let yes = Button::new("Yes", ClickAction::ConfirmYes)
        .kind(ButtonKind::Danger)
        .padded();
    let no = Button::new("No", ClickAction::ConfirmNo)
        .kind(ButtonKind::Secondary)
        .padded();
    let total = yes.width() + 3 + no.width();
    let x = inner.x + inner.width.saturating_sub(total) / 2;
    let y = inner.bottom() - 1;

    let yes_rect = yes.render(frame, inner, (x, y), registry);
    no.render(frame, inner, (yes_rect.right() + 3, y), registry);
}
