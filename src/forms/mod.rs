//! Modal form controllers.
//!
//! Each entity has a controller owning the form's edit session, visibility,
//! field buffers, focus and last validation error. The shared lifecycle is
//! provided by [`FormController`]:
//!
//! ```text
//! open(store, id?) -> edit fields -> save(store) -> closed
//!                                 \-> close()     -> closed, nothing written
//! ```
//!
//! `save` turns the field text into a draft, then either adds it or merges
//! it into the record being edited. A conversion failure leaves the form
//! open with the error attached to the offending field.

mod appointment;
mod doctor;
mod field;
mod patient;
mod session;

pub use appointment::AppointmentForm;
pub use doctor::DoctorForm;
pub use field::{ChoiceField, FieldInput, FormField, TextField};
pub use patient::PatientForm;
pub use session::EditSession;

use crate::error::FormError;
use crate::models::{EntityKind, Record};
use crate::store::{Collection, RecordStore};

/// What a successful save did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A record was created with this id.
    Added(u32),
    /// An edit was merged. `found` is false when the record had been removed
    /// while the form was open, in which case nothing changed.
    Updated { id: u32, found: bool },
}

/// Field buffers plus session bookkeeping shared by every form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub session: EditSession,
    pub visible: bool,
    pub fields: Vec<FormField>,
    pub focus: usize,
    pub error: Option<FormError>,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            session: EditSession::Adding,
            visible: false,
            fields,
            focus: 0,
            error: None,
        }
    }

    /// Clear every field, focus the first one and drop any error.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.focus = 0;
        self.error = None;
    }

    pub fn focused(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focus = self.focus.checked_sub(1).unwrap_or(self.fields.len() - 1);
        }
    }

    /// Focus a field by index. Out-of-range indices are ignored.
    pub fn focus_field(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
        }
    }

    /// Type a character into the focused text field.
    pub fn insert_char(&mut self, c: char) {
        if let Some(FieldInput::Text(text)) = self.fields.get_mut(self.focus).map(|f| &mut f.input) {
            text.push(c);
            self.error = None;
        }
    }

    /// Delete the last character of the focused text field.
    pub fn backspace(&mut self) {
        if let Some(FieldInput::Text(text)) = self.fields.get_mut(self.focus).map(|f| &mut f.input) {
            text.backspace();
            self.error = None;
        }
    }

    /// Advance the focused picker to its next option.
    pub fn next_choice(&mut self) {
        if let Some(choice) = self.choice_mut(self.focus) {
            choice.next();
            self.error = None;
        }
    }

    /// Move the focused picker back to its previous option.
    pub fn previous_choice(&mut self) {
        if let Some(choice) = self.choice_mut(self.focus) {
            choice.previous();
            self.error = None;
        }
    }

    pub fn text(&self, index: usize) -> &str {
        match self.fields.get(index).map(|f| &f.input) {
            Some(FieldInput::Text(text)) => text.value(),
            _ => "",
        }
    }

    pub fn set_text(&mut self, index: usize, value: impl Into<String>) {
        if let Some(FieldInput::Text(text)) = self.fields.get_mut(index).map(|f| &mut f.input) {
            text.set(value);
        }
    }

    pub fn choice(&self, index: usize) -> Option<&ChoiceField> {
        match self.fields.get(index).map(|f| &f.input) {
            Some(FieldInput::Choice(choice)) => Some(choice),
            _ => None,
        }
    }

    pub fn choice_mut(&mut self, index: usize) -> Option<&mut ChoiceField> {
        match self.fields.get_mut(index).map(|f| &mut f.input) {
            Some(FieldInput::Choice(choice)) => Some(choice),
            _ => None,
        }
    }

    fn label(&self, index: usize) -> &'static str {
        self.fields.get(index).map_or("", |f| f.label)
    }

    /// Trimmed text of a field that must not be blank.
    pub fn required_text(&self, index: usize) -> Result<String, FormError> {
        let value = self.text(index).trim();
        if value.is_empty() {
            return Err(FormError::Required {
                field: self.label(index),
            });
        }
        Ok(value.to_string())
    }

    /// Trimmed text of a field that may be blank.
    pub fn optional_text(&self, index: usize) -> String {
        self.text(index).trim().to_string()
    }

    /// Selected option of a picker that must have one.
    pub fn required_choice(&self, index: usize) -> Result<String, FormError> {
        self.choice(index)
            .and_then(ChoiceField::value)
            .map(str::to_string)
            .ok_or(FormError::NothingSelected {
                field: self.label(index),
            })
    }

    /// Message to show under the field at `index`, if the last save failed there.
    pub fn error_for(&self, index: usize) -> Option<String> {
        let error = self.error.as_ref()?;
        let field = self.fields.get(index)?;
        (error.field() == field.label).then(|| error.to_string())
    }

    fn index_of(&self, label: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.label == label)
    }
}

/// Shared lifecycle of the patient, doctor and appointment forms.
///
/// Implementors supply the entity-specific parts: how to refresh
/// store-dependent fields, how to copy a record into the fields, and how to
/// turn the fields back into a record. `open`, `close` and `save` are shared.
pub trait FormController {
    fn kind(&self) -> EntityKind;

    fn state(&self) -> &FormState;

    fn state_mut(&mut self) -> &mut FormState;

    /// Refresh fields whose options come from the store. Called on every open.
    fn prepare(&mut self, _store: &RecordStore) {}

    /// Copy the record with `id` into the fields. Returns false if it does
    /// not exist.
    fn load(&mut self, store: &RecordStore, id: u32) -> bool;

    /// Convert the fields and write them into the store according to the
    /// current session.
    fn commit(&self, store: &mut RecordStore) -> Result<SaveOutcome, FormError>;

    fn is_open(&self) -> bool {
        self.state().visible
    }

    fn session(&self) -> EditSession {
        self.state().session
    }

    fn title(&self) -> &'static str {
        form_title(self.kind(), self.session())
    }

    /// Show the form, empty for adding or filled from the record for editing.
    fn open(&mut self, store: &RecordStore, id: Option<u32>) {
        self.state_mut().reset();
        self.prepare(store);

        if let Some(id) = id {
            if !self.load(store, id) {
                tracing::debug!(kind = %self.kind(), id, "edit requested for unknown record");
            }
        }

        let state = self.state_mut();
        state.session = EditSession::from(id);
        state.visible = true;
        tracing::debug!(kind = %self.kind(), session = ?self.session(), "form opened");
    }

    /// Hide the form without writing anything.
    fn close(&mut self) {
        let state = self.state_mut();
        state.visible = false;
        state.session = EditSession::Adding;
        state.error = None;
    }

    /// Validate and write the form, closing it on success.
    ///
    /// On failure the form stays open, focus moves to the offending field
    /// and the error is kept for display.
    fn save(&mut self, store: &mut RecordStore) -> Result<SaveOutcome, FormError> {
        match self.commit(store) {
            Ok(outcome) => {
                tracing::info!(kind = %self.kind(), ?outcome, "form saved");
                self.close();
                Ok(outcome)
            }
            Err(err) => {
                tracing::debug!(kind = %self.kind(), error = %err, "form rejected");
                let state = self.state_mut();
                if let Some(index) = state.index_of(err.field()) {
                    state.focus = index;
                }
                state.error = Some(err.clone());
                Err(err)
            }
        }
    }
}

/// Dialog title for a form of `kind` in `session`.
pub fn form_title(kind: EntityKind, session: EditSession) -> &'static str {
    match (kind, session.is_editing()) {
        (EntityKind::Patient, false) => "Add Patient",
        (EntityKind::Patient, true) => "Edit Patient",
        (EntityKind::Doctor, false) => "Add Doctor",
        (EntityKind::Doctor, true) => "Edit Doctor",
        (EntityKind::Appointment, false) => "Schedule Appointment",
        (EntityKind::Appointment, true) => "Edit Appointment",
    }
}

/// Add `draft` or merge it into the record being edited.
fn commit_draft<R>(collection: &mut Collection<R>, session: EditSession, draft: R::Draft) -> SaveOutcome
where
    R: Record,
    R::Patch: From<R::Draft>,
{
    match session {
        EditSession::Adding => SaveOutcome::Added(collection.add(draft).id()),
        EditSession::Editing(id) => SaveOutcome::Updated {
            id,
            found: collection.update(id, draft.into()),
        },
    }
}
