//! Modal form dialog for adding and editing records.

use ratatui::{layout::Rect, Frame};

use super::components::{
    calculate_input_field_height, dialog_rect, render_dialog_frame, render_input_field, Button,
    ButtonKind, DialogFrameConfig, InputFieldConfig,
};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use crate::forms::FormController;

/// Blank row plus the button row under the fields.
const FOOTER_HEIGHT: u16 = 2;

/// Render `form` centered over `area`.
///
/// Clicking outside the dialog dismisses it. Clicking a field focuses it.
pub fn render_form_dialog(
    frame: &mut Frame,
    area: Rect,
    form: &dyn FormController,
    ctx: &LayoutContext,
    registry: &mut HitAreaRegistry,
) {
    let state = form.state();
    let errors: Vec<Option<String>> = (0..state.fields.len())
        .map(|index| state.error_for(index))
        .collect();

    let configs: Vec<InputFieldConfig> = state
        .fields
        .iter()
        .zip(&errors)
        .enumerate()
        .map(|(index, (field, error))| {
            InputFieldConfig::new(field.label, field.display_value())
                .focused(index == state.focus)
                .choice(field.is_choice())
                .placeholder(field.placeholder)
                .error(error.as_deref())
        })
        .collect();

    let fields_height: u16 = configs
        .iter()
        .map(|config| calculate_input_field_height(config, ctx))
        .sum();
    let config = DialogFrameConfig::new(form.title(), fields_height + FOOTER_HEIGHT)
        .min_width(36)
        .max_width(64);

    registry.register(area, ClickAction::DismissModal, None);
    registry.register(dialog_rect(area, ctx, &config), ClickAction::ModalBody, None);
    let inner = render_dialog_frame(frame, area, ctx, &config);
    if inner.height == 0 {
        return;
    }

    let buttons_y = inner.bottom() - 1;
    let mut y = inner.y;
    for (index, field) in configs.iter().enumerate() {
        let height = calculate_input_field_height(field, ctx);
        let field_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: height.min(buttons_y.saturating_sub(y)),
        };
        if field_area.is_empty() {
            break;
        }

        registry.register(field_area, ClickAction::FocusField(index), None);
        render_input_field(frame, field_area, field, ctx);
        y += height;
    }

    let save = Button::new("Save", ClickAction::SaveForm)
        .kind(ButtonKind::Primary)
        .padded();
    let cancel = Button::new("Cancel", ClickAction::CancelForm)
        .kind(ButtonKind::Secondary)
        .padded();
    let save_rect = save.render(frame, inner, (inner.x + 2, buttons_y), registry);
    cancel.render(frame, inner, (save_rect.right() + 2, buttons_y), registry);
}
