//! Click action handler.
//!
//! Translates click actions dispatched from the hit area registry into App
//! state mutations. Every action maps onto the same App operation the
//! matching keyboard command uses.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();
    tracing::debug!(?action, "click");

    match action {
        // =====================================================================
        // Navigation
        // =====================================================================
        ClickAction::SwitchView(view) => app.switch_view(view),
        ClickAction::AddRecord(kind) => app.add_record_of(kind),

        // =====================================================================
        // Table rows
        // =====================================================================
        ClickAction::SelectRow { kind, id } => app.select_id(kind, id),
        ClickAction::Row { kind, id, action } => app.dispatch_row_action(kind, id, action),

        // =====================================================================
        // Form dialog
        // =====================================================================
        ClickAction::FocusField(index) => {
            if let Some(kind) = app.open_form_kind() {
                app.form_mut(kind).state_mut().focus_field(index);
            }
        }
        ClickAction::SaveForm => {
            let _ = app.save_form();
        }
        ClickAction::CancelForm => app.close_form(),

        // =====================================================================
        // Confirmation dialog
        // =====================================================================
        ClickAction::ConfirmYes => {
            app.resolve_confirmation(true);
        }
        ClickAction::ConfirmNo => {
            app.resolve_confirmation(false);
        }

        // =====================================================================
        // Modal plumbing
        // =====================================================================
        ClickAction::DismissModal => {
            if app.confirm.is_some() {
                app.resolve_confirmation(false);
            } else {
                app.close_form();
            }
        }
        ClickAction::ModalBody => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{RowAction, View};
    use crate::forms::FormController;
    use crate::models::EntityKind;

    #[test]
    fn test_backdrop_click_closes_form_without_saving() {
        let mut app = App::new();
        app.open_record_form(EntityKind::Patient, None);
        app.patient_form.state_mut().set_text(0, "Carl");

        handle_click_action(&mut app, ClickAction::DismissModal);

        assert!(!app.patient_form.is_open());
        assert_eq!(app.store.patients.len(), 2);
    }

    #[test]
    fn test_backdrop_click_declines_delete() {
        let mut app = App::new();
        app.request_delete(EntityKind::Doctor, 1);
        handle_click_action(&mut app, ClickAction::DismissModal);
        assert!(app.confirm.is_none());
        assert_eq!(app.store.doctors.len(), 2);
    }

    #[test]
    fn test_row_edit_click_opens_edit_form() {
        let mut app = App::new();
        app.switch_view(View::Doctors);
        handle_click_action(
            &mut app,
            ClickAction::Row {
                kind: EntityKind::Doctor,
                id: 2,
                action: RowAction::Edit,
            },
        );
        assert_eq!(app.doctor_form.title(), "Edit Doctor");
        assert_eq!(app.doctor_form.state().text(0), "Dr. Robert Green");
        assert_eq!(app.selected_id(EntityKind::Doctor), Some(2));
    }

    #[test]
    fn test_focus_field_click() {
        let mut app = App::new();
        app.open_record_form(EntityKind::Patient, None);
        handle_click_action(&mut app, ClickAction::FocusField(3));
        assert_eq!(app.patient_form.state().focus, 3);
    }

    #[test]
    fn test_nav_click_switches_view() {
        let mut app = App::new();
        handle_click_action(&mut app, ClickAction::SwitchView(View::Appointments));
        assert_eq!(app.active_view(), View::Appointments);
    }
}
