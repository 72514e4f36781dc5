//! In-memory record store.
//!
//! Holds one ordered [`Collection`] per entity type. Nothing is persisted:
//! every run starts from either the seed data or empty collections.

mod collection;
mod seed;

pub use collection::Collection;
pub use seed::seed_store;

use crate::models::{Appointment, Doctor, EntityKind, Patient};

/// Sizes of the three collections at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreCounts {
    pub patients: usize,
    pub doctors: usize,
    pub appointments: usize,
}

/// Owner of all patient, doctor and appointment records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    pub patients: Collection<Patient>,
    pub doctors: Collection<Doctor>,
    pub appointments: Collection<Appointment>,
}

impl RecordStore {
    /// Create a store with empty collections. Ids start at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the sample records every session starts with.
    pub fn seeded() -> Self {
        seed_store()
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            patients: self.patients.len(),
            doctors: self.doctors.len(),
            appointments: self.appointments.len(),
        }
    }

    /// Number of records of the given kind.
    pub fn len_of(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Patient => self.patients.len(),
            EntityKind::Doctor => self.doctors.len(),
            EntityKind::Appointment => self.appointments.len(),
        }
    }

    /// Ids of the given kind, in collection order.
    pub fn ids_of(&self, kind: EntityKind) -> Vec<u32> {
        match kind {
            EntityKind::Patient => self.patients.ids(),
            EntityKind::Doctor => self.doctors.ids(),
            EntityKind::Appointment => self.appointments.ids(),
        }
    }

    /// Remove a record of any kind. Unknown ids are ignored.
    pub fn remove(&mut self, kind: EntityKind, id: u32) -> bool {
        match kind {
            EntityKind::Patient => self.patients.remove(id),
            EntityKind::Doctor => self.doctors.remove(id),
            EntityKind::Appointment => self.appointments.remove(id),
        }
    }

    /// Current patient names, in collection order, for the appointment picker.
    pub fn patient_names(&self) -> Vec<String> {
        self.patients.iter().map(|p| p.name.clone()).collect()
    }

    /// Current doctor names, in collection order, for the appointment picker.
    pub fn doctor_names(&self) -> Vec<String> {
        self.doctors.iter().map(|d| d.name.clone()).collect()
    }
}
