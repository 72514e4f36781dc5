//! Row projections for the patient, doctor and appointment tables.

use crate::models::{format_short_date, format_time, EntityKind};
use crate::store::RecordStore;

/// One table row, tagged with the id its Edit and Delete actions target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: u32,
    pub cells: Vec<String>,
}

/// A table ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableProjection {
    pub kind: EntityKind,
    pub headers: Vec<&'static str>,
    pub rows: Vec<TableRow>,
    /// Shown in place of the rows when there are none.
    pub empty_message: String,
}

impl TableProjection {
    fn new(kind: EntityKind, headers: Vec<&'static str>, rows: Vec<TableRow>) -> Self {
        Self {
            kind,
            headers,
            rows,
            empty_message: kind.empty_message(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Id of the row at `index`.
    pub fn id_at(&self, index: usize) -> Option<u32> {
        self.rows.get(index).map(|row| row.id)
    }
}

pub fn patient_table(store: &RecordStore) -> TableProjection {
    let rows = store
        .patients
        .iter()
        .map(|patient| TableRow {
            id: patient.id,
            cells: vec![
                patient.name.clone(),
                patient.age.to_string(),
                patient.gender.to_string(),
                patient.contact.clone(),
                patient.history_display().to_string(),
            ],
        })
        .collect();

    TableProjection::new(
        EntityKind::Patient,
        vec!["Name", "Age", "Gender", "Contact", "Medical History"],
        rows,
    )
}

pub fn doctor_table(store: &RecordStore) -> TableProjection {
    let rows = store
        .doctors
        .iter()
        .map(|doctor| TableRow {
            id: doctor.id,
            cells: vec![
                doctor.name.clone(),
                doctor.specialty.clone(),
                doctor.contact.clone(),
            ],
        })
        .collect();

    TableProjection::new(
        EntityKind::Doctor,
        vec!["Name", "Specialty", "Contact"],
        rows,
    )
}

pub fn appointment_table(store: &RecordStore) -> TableProjection {
    let rows = store
        .appointments
        .iter()
        .map(|appointment| TableRow {
            id: appointment.id,
            cells: vec![
                appointment.patient.clone(),
                appointment.doctor.clone(),
                format_short_date(appointment.date),
                format_time(appointment.time),
                appointment.reason.clone(),
            ],
        })
        .collect();

    TableProjection::new(
        EntityKind::Appointment,
        vec!["Patient", "Doctor", "Date", "Time", "Reason"],
        rows,
    )
}

/// Projection for any entity kind.
pub fn table_for(store: &RecordStore, kind: EntityKind) -> TableProjection {
    match kind {
        EntityKind::Patient => patient_table(store),
        EntityKind::Doctor => doctor_table(store),
        EntityKind::Appointment => appointment_table(store),
    }
}
