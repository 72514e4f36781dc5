//! Record types for the hospital records store.
//!
//! Each entity comes in three shapes:
//! - the stored record (`Patient`, `Doctor`, `Appointment`) carrying its id
//! - a draft (every field, no id) used when adding
//! - a patch (every field optional) used when merging edits

pub mod appointment;
pub mod calendar;
pub mod doctor;
mod entity;
pub mod patient;

pub use appointment::{Appointment, AppointmentDraft, AppointmentPatch};
pub use calendar::{format_input_date, format_short_date, format_time, parse_date, parse_time};
pub use doctor::{Doctor, DoctorDraft, DoctorPatch};
pub use entity::{EntityKind, Record};
pub use patient::{Gender, Patient, PatientDraft, PatientPatch};
