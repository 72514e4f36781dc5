//! Record actions: opening, saving and closing forms, and deleting.
//!
//! Every successful write marks the app dirty, so the affected table and
//! the dashboard are recomputed on the next frame.

use super::{App, PendingDelete, RowAction, View};
use crate::error::FormError;
use crate::forms::{FormController, SaveOutcome};
use crate::models::EntityKind;

impl App {
    /// Open the form of `kind`, for a new record or for editing `id`.
    ///
    /// Any other open form or pending confirmation is dismissed first.
    pub fn open_record_form(&mut self, kind: EntityKind, id: Option<u32>) {
        self.dismiss_modals();
        let App {
            store,
            patient_form,
            doctor_form,
            appointment_form,
            ..
        } = self;
        match kind {
            EntityKind::Patient => patient_form.open(store, id),
            EntityKind::Doctor => doctor_form.open(store, id),
            EntityKind::Appointment => appointment_form.open(store, id),
        }
        self.mark_dirty();
    }

    /// Close whichever form is open without saving.
    pub fn close_form(&mut self) {
        if let Some(kind) = self.open_form_kind() {
            self.form_mut(kind).close();
            tracing::debug!(%kind, "form closed");
            self.mark_dirty();
        }
    }

    /// Save the open form.
    ///
    /// Returns the outcome on success; on a validation failure the form stays
    /// open with the error attached. `None` when no form is open.
    pub fn save_form(&mut self) -> Option<Result<SaveOutcome, FormError>> {
        let kind = self.open_form_kind()?;
        let App {
            store,
            patient_form,
            doctor_form,
            appointment_form,
            ..
        } = self;
        let result = match kind {
            EntityKind::Patient => patient_form.save(store),
            EntityKind::Doctor => doctor_form.save(store),
            EntityKind::Appointment => appointment_form.save(store),
        };

        if let Ok(SaveOutcome::Added(id)) = result {
            self.select_id(kind, id);
        }
        self.mark_dirty();
        Some(result)
    }

    /// Ask for confirmation before deleting record `id` of `kind`.
    pub fn request_delete(&mut self, kind: EntityKind, id: u32) {
        self.dismiss_modals();
        self.confirm = Some(PendingDelete { kind, id });
        tracing::debug!(%kind, id, "delete requested");
        self.mark_dirty();
    }

    /// Answer the pending confirmation. On `true` the record is removed.
    ///
    /// Returns whether a record was removed.
    pub fn resolve_confirmation(&mut self, confirmed: bool) -> bool {
        let Some(pending) = self.confirm.take() else {
            return false;
        };
        self.mark_dirty();

        if !confirmed {
            tracing::debug!(kind = %pending.kind, id = pending.id, "delete declined");
            return false;
        }

        let removed = self.store.remove(pending.kind, pending.id);
        if removed {
            tracing::info!(kind = %pending.kind, id = pending.id, "record deleted");
        }
        self.clamp_selection(pending.kind);
        removed
    }

    /// Run a table row button.
    pub fn dispatch_row_action(&mut self, kind: EntityKind, id: u32, action: RowAction) {
        self.select_id(kind, id);
        match action {
            RowAction::Edit => self.open_record_form(kind, Some(id)),
            RowAction::Delete => self.request_delete(kind, id),
        }
    }

    /// Open an empty form for the entity of the active view.
    pub fn add_record(&mut self) {
        if let Some(kind) = self.active_view().entity() {
            self.open_record_form(kind, None);
        }
    }

    /// Edit the selected row of the active view.
    pub fn edit_selected(&mut self) {
        if let Some((kind, id)) = self.active_selection() {
            self.dispatch_row_action(kind, id, RowAction::Edit);
        }
    }

    /// Delete the selected row of the active view, after confirmation.
    pub fn delete_selected(&mut self) {
        if let Some((kind, id)) = self.active_selection() {
            self.dispatch_row_action(kind, id, RowAction::Delete);
        }
    }

    fn active_selection(&self) -> Option<(EntityKind, u32)> {
        let kind = self.active_view().entity()?;
        let id = self.selected_id(kind)?;
        Some((kind, id))
    }

    fn dismiss_modals(&mut self) {
        for kind in EntityKind::ALL {
            if self.form(kind).is_open() {
                self.form_mut(kind).close();
            }
        }
        self.confirm = None;
    }

    /// Whether anything is drawn over the active view.
    pub fn has_modal(&self) -> bool {
        self.confirm.is_some() || self.open_form_kind().is_some()
    }

    /// Open the add form for `kind`, switching to its view first.
    pub fn add_record_of(&mut self, kind: EntityKind) {
        self.switch_view(View::for_entity(kind));
        self.open_record_form(kind, None);
    }
}

#[cfg(test)]
mod tests {
    use crate::adapters::FixedClock;
    use crate::app::{App, RowAction, View};
    use crate::forms::{FormController, SaveOutcome};
    use crate::models::EntityKind;
    use crate::store::RecordStore;

    fn app() -> App {
        App::with_store(RecordStore::seeded(), FixedClock::ymd(2025, 10, 1))
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let mut app = app();
        app.request_delete(EntityKind::Patient, 1);
        assert!(app.has_modal());

        assert!(!app.resolve_confirmation(false));
        assert!(app.confirm.is_none());
        assert_eq!(app.store.patients.len(), 2);
    }

    #[test]
    fn test_confirmed_delete_updates_dashboard() {
        let mut app = app();
        app.switch_view(View::Doctors);
        app.dispatch_row_action(EntityKind::Doctor, 1, RowAction::Delete);
        assert_eq!(
            app.confirm.map(|c| c.prompt()),
            Some("Are you sure you want to delete this doctor?".to_string())
        );

        assert!(app.resolve_confirmation(true));
        assert_eq!(app.dashboard().totals.doctors, 1);
        // Appointments keep the name they were booked with.
        assert_eq!(app.store.appointments.find(1).unwrap().doctor, "Dr. Alice Brown");
    }

    #[test]
    fn test_deleting_last_row_moves_selection_up() {
        let mut app = app();
        app.switch_view(View::Patients);
        app.select_next();
        app.delete_selected();
        app.resolve_confirmation(true);
        assert_eq!(app.selected_index(EntityKind::Patient), 0);
        assert_eq!(app.selected_id(EntityKind::Patient), Some(1));
    }

    #[test]
    fn test_edit_selected_opens_form_in_edit_mode() {
        let mut app = app();
        app.switch_view(View::Patients);
        app.select_next();
        app.edit_selected();

        assert_eq!(app.open_form_kind(), Some(EntityKind::Patient));
        assert_eq!(app.patient_form.title(), "Edit Patient");
    }

    #[test]
    fn test_add_record_does_nothing_on_dashboard() {
        let mut app = app();
        app.add_record();
        assert!(app.open_form_kind().is_none());
    }

    #[test]
    fn test_save_selects_new_row() {
        let mut app = app();
        app.add_record_of(EntityKind::Doctor);
        let state = app.doctor_form.state_mut();
        state.set_text(0, "Dr. Chen");
        state.set_text(1, "Neurology");
        state.set_text(2, "5550100");

        let outcome = app.save_form().unwrap().unwrap();
        assert_eq!(outcome, SaveOutcome::Added(3));
        assert_eq!(app.selected_id(EntityKind::Doctor), Some(3));
        assert!(!app.has_modal());
    }

    #[test]
    fn test_opening_a_form_dismisses_confirmation() {
        let mut app = app();
        app.request_delete(EntityKind::Patient, 1);
        app.open_record_form(EntityKind::Patient, None);
        assert!(app.confirm.is_none());
        assert_eq!(app.open_form_kind(), Some(EntityKind::Patient));
    }
}
