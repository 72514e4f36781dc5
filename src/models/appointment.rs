//! Appointment records.
//!
//! `patient` and `doctor` hold copies of names, not ids. Renaming or removing
//! the referenced patient or doctor leaves existing appointments untouched.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::entity::{EntityKind, Record};

/// An appointment as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub patient: String,
    pub doctor: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: String,
}

impl Appointment {
    /// Date and time combined, used for ordering.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub patient: String,
    pub doctor: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentPatch {
    pub patient: Option<String>,
    pub doctor: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub reason: Option<String>,
}

impl From<AppointmentDraft> for AppointmentPatch {
    fn from(draft: AppointmentDraft) -> Self {
        Self {
            patient: Some(draft.patient),
            doctor: Some(draft.doctor),
            date: Some(draft.date),
            time: Some(draft.time),
            reason: Some(draft.reason),
        }
    }
}

impl Record for Appointment {
    type Draft = AppointmentDraft;
    type Patch = AppointmentPatch;

    const KIND: EntityKind = EntityKind::Appointment;

    fn id(&self) -> u32 {
        self.id
    }

    fn from_draft(id: u32, draft: AppointmentDraft) -> Self {
        Self {
            id,
            patient: draft.patient,
            doctor: draft.doctor,
            date: draft.date,
            time: draft.time,
            reason: draft.reason,
        }
    }

    fn apply(&mut self, patch: AppointmentPatch) {
        if let Some(patient) = patch.patient {
            self.patient = patient;
        }
        if let Some(doctor) = patch.doctor {
            self.doctor = doctor;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(reason) = patch.reason {
            self.reason = reason;
        }
    }
}
