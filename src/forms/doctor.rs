//! Doctor form.

use super::{commit_draft, FormController, FormField, FormState, SaveOutcome};
use crate::error::FormError;
use crate::models::{DoctorDraft, EntityKind};
use crate::store::RecordStore;

const NAME: usize = 0;
const SPECIALTY: usize = 1;
const CONTACT: usize = 2;

#[derive(Debug, Clone)]
pub struct DoctorForm {
    state: FormState,
}

impl Default for DoctorForm {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorForm {
    pub fn new() -> Self {
        Self {
            state: FormState::new(vec![
                FormField::text("Name", "Dr. Full Name"),
                FormField::text("Specialty", "e.g. Cardiology"),
                FormField::text("Contact", "Phone number"),
            ]),
        }
    }

    pub fn draft(&self) -> Result<DoctorDraft, FormError> {
        Ok(DoctorDraft {
            name: self.state.required_text(NAME)?,
            specialty: self.state.required_text(SPECIALTY)?,
            contact: self.state.required_text(CONTACT)?,
        })
    }
}

impl FormController for DoctorForm {
    fn kind(&self) -> EntityKind {
        EntityKind::Doctor
    }

    fn state(&self) -> &FormState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    fn load(&mut self, store: &RecordStore, id: u32) -> bool {
        let Some(doctor) = store.doctors.find(id) else {
            return false;
        };
        self.state.set_text(NAME, doctor.name.as_str());
        self.state.set_text(SPECIALTY, doctor.specialty.as_str());
        self.state.set_text(CONTACT, doctor.contact.as_str());
        true
    }

    fn commit(&self, store: &mut RecordStore) -> Result<SaveOutcome, FormError> {
        let draft = self.draft()?;
        Ok(commit_draft(&mut store.doctors, self.state.session, draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_merges_into_existing_doctor() {
        let mut store = RecordStore::seeded();
        let mut form = DoctorForm::new();
        form.open(&store, Some(1));
        form.state_mut().set_text(SPECIALTY, "Cardiac Surgery");

        let outcome = form.save(&mut store).unwrap();
        assert_eq!(outcome, SaveOutcome::Updated { id: 1, found: true });

        let doctor = store.doctors.find(1).unwrap();
        assert_eq!(doctor.name, "Dr. Alice Brown");
        assert_eq!(doctor.specialty, "Cardiac Surgery");
        assert_eq!(store.doctors.len(), 2);
    }

    #[test]
    fn test_blank_specialty_is_required() {
        let mut store = RecordStore::new();
        let mut form = DoctorForm::new();
        form.open(&store, None);
        form.state_mut().set_text(NAME, "Dr. Chen");
        form.state_mut().set_text(CONTACT, "5550100");

        assert_eq!(
            form.save(&mut store),
            Err(FormError::Required { field: "Specialty" })
        );
        assert_eq!(form.state().focus, SPECIALTY);
        assert!(store.doctors.is_empty());
    }

    #[test]
    fn test_edit_of_removed_doctor_is_noop() {
        let mut store = RecordStore::seeded();
        let mut form = DoctorForm::new();
        form.open(&store, Some(2));
        store.doctors.remove(2);

        let outcome = form.save(&mut store).unwrap();
        assert_eq!(outcome, SaveOutcome::Updated { id: 2, found: false });
        assert_eq!(store.doctors.len(), 1);
        assert_eq!(store.doctors.next_id(), 3);
    }
}
