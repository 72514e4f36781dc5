//! Patient form.

use super::{commit_draft, FormController, FormField, FormState, SaveOutcome};
use crate::error::FormError;
use crate::models::{EntityKind, Gender, PatientDraft};
use crate::store::RecordStore;

const NAME: usize = 0;
const AGE: usize = 1;
const GENDER: usize = 2;
const CONTACT: usize = 3;
const HISTORY: usize = 4;

#[derive(Debug, Clone)]
pub struct PatientForm {
    state: FormState,
}

impl Default for PatientForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientForm {
    pub fn new() -> Self {
        let genders = Gender::ALL.iter().map(|g| g.as_str().to_string()).collect();
        Self {
            state: FormState::new(vec![
                FormField::text("Name", "Full name"),
                FormField::text("Age", "Years"),
                FormField::choice("Gender", genders),
                FormField::text("Contact", "Phone number"),
                FormField::text("Medical History", "Optional"),
            ]),
        }
    }

    /// Convert the fields into a draft.
    pub fn draft(&self) -> Result<PatientDraft, FormError> {
        let name = self.state.required_text(NAME)?;
        let age_text = self.state.required_text(AGE)?;
        let age = age_text
            .parse::<u32>()
            .map_err(|_| FormError::InvalidNumber {
                field: "Age",
                value: age_text.clone(),
            })?;
        let gender = self
            .state
            .required_choice(GENDER)?
            .parse::<Gender>()
            .map_err(|_| FormError::NothingSelected { field: "Gender" })?;
        let contact = self.state.required_text(CONTACT)?;
        let history = self.state.optional_text(HISTORY);

        Ok(PatientDraft {
            name,
            age,
            gender,
            contact,
            history,
        })
    }
}

impl FormController for PatientForm {
    fn kind(&self) -> EntityKind {
        EntityKind::Patient
    }

    fn state(&self) -> &FormState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    fn load(&mut self, store: &RecordStore, id: u32) -> bool {
        let Some(patient) = store.patients.find(id) else {
            return false;
        };
        self.state.set_text(NAME, patient.name.as_str());
        self.state.set_text(AGE, patient.age.to_string());
        if let Some(gender) = self.state.choice_mut(GENDER) {
            gender.select_value(patient.gender.as_str());
        }
        self.state.set_text(CONTACT, patient.contact.as_str());
        self.state.set_text(HISTORY, patient.history.as_str());
        true
    }

    fn commit(&self, store: &mut RecordStore) -> Result<SaveOutcome, FormError> {
        let draft = self.draft()?;
        Ok(commit_draft(&mut store.patients, self.state.session, draft))
    }
}
