//! Doctor records.

use serde::{Deserialize, Serialize};

use super::entity::{EntityKind, Record};

/// A doctor as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorDraft {
    pub name: String,
    pub specialty: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorPatch {
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub contact: Option<String>,
}

impl From<DoctorDraft> for DoctorPatch {
    fn from(draft: DoctorDraft) -> Self {
        Self {
            name: Some(draft.name),
            specialty: Some(draft.specialty),
            contact: Some(draft.contact),
        }
    }
}

impl Record for Doctor {
    type Draft = DoctorDraft;
    type Patch = DoctorPatch;

    const KIND: EntityKind = EntityKind::Doctor;

    fn id(&self) -> u32 {
        self.id
    }

    fn from_draft(id: u32, draft: DoctorDraft) -> Self {
        Self {
            id,
            name: draft.name,
            specialty: draft.specialty,
            contact: draft.contact,
        }
    }

    fn apply(&mut self, patch: DoctorPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(specialty) = patch.specialty {
            self.specialty = specialty;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
    }
}
