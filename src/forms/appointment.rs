//! Appointment form.
//!
//! The patient and doctor pickers are rebuilt from the store every time the
//! form opens, so they list exactly the names that exist at that moment.

use super::{commit_draft, ChoiceField, FormController, FormField, FormState, SaveOutcome};
use crate::error::FormError;
use crate::models::{format_input_date, format_time, parse_date, parse_time, AppointmentDraft, EntityKind};
use crate::store::RecordStore;

const PATIENT: usize = 0;
const DOCTOR: usize = 1;
const DATE: usize = 2;
const TIME: usize = 3;
const REASON: usize = 4;

#[derive(Debug, Clone)]
pub struct AppointmentForm {
    state: FormState,
}

impl Default for AppointmentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentForm {
    pub fn new() -> Self {
        Self {
            state: FormState::new(vec![
                FormField::prompt_choice("Patient", "Select Patient"),
                FormField::prompt_choice("Doctor", "Select Doctor"),
                FormField::text("Date", "YYYY-MM-DD"),
                FormField::text("Time", "HH:MM"),
                FormField::text("Reason", "Reason for visit"),
            ]),
        }
    }

    /// Names currently offered by the patient picker.
    pub fn patient_options(&self) -> &[String] {
        self.state
            .choice(PATIENT)
            .map(ChoiceField::options)
            .unwrap_or_default()
    }

    /// Names currently offered by the doctor picker.
    pub fn doctor_options(&self) -> &[String] {
        self.state
            .choice(DOCTOR)
            .map(ChoiceField::options)
            .unwrap_or_default()
    }

    pub fn draft(&self) -> Result<AppointmentDraft, FormError> {
        let patient = self.state.required_choice(PATIENT)?;
        let doctor = self.state.required_choice(DOCTOR)?;

        let date_text = self.state.required_text(DATE)?;
        let date = parse_date(&date_text).ok_or_else(|| FormError::InvalidDate {
            field: "Date",
            value: date_text.clone(),
        })?;

        let time_text = self.state.required_text(TIME)?;
        let time = parse_time(&time_text).ok_or_else(|| FormError::InvalidTime {
            field: "Time",
            value: time_text.clone(),
        })?;

        let reason = self.state.required_text(REASON)?;

        Ok(AppointmentDraft {
            patient,
            doctor,
            date,
            time,
            reason,
        })
    }
}

impl FormController for AppointmentForm {
    fn kind(&self) -> EntityKind {
        EntityKind::Appointment
    }

    fn state(&self) -> &FormState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    fn prepare(&mut self, store: &RecordStore) {
        if let Some(patients) = self.state.choice_mut(PATIENT) {
            patients.set_options(store.patient_names());
        }
        if let Some(doctors) = self.state.choice_mut(DOCTOR) {
            doctors.set_options(store.doctor_names());
        }
    }

    fn load(&mut self, store: &RecordStore, id: u32) -> bool {
        let Some(appointment) = store.appointments.find(id) else {
            return false;
        };
        // A stored name missing from the options leaves its picker empty.
        if let Some(patients) = self.state.choice_mut(PATIENT) {
            patients.select_value(&appointment.patient);
        }
        if let Some(doctors) = self.state.choice_mut(DOCTOR) {
            doctors.select_value(&appointment.doctor);
        }
        self.state.set_text(DATE, format_input_date(appointment.date));
        self.state.set_text(TIME, format_time(appointment.time));
        self.state.set_text(REASON, appointment.reason.as_str());
        true
    }

    fn commit(&self, store: &mut RecordStore) -> Result<SaveOutcome, FormError> {
        let draft = self.draft()?;
        Ok(commit_draft(&mut store.appointments, self.state.session, draft))
    }
}
