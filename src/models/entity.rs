//! Entity kinds and the shared record contract.

use serde::{Deserialize, Serialize};

/// The three kinds of record managed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Patient,
    Doctor,
    Appointment,
}

impl EntityKind {
    /// All kinds, in navigation order.
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Patient,
        EntityKind::Doctor,
        EntityKind::Appointment,
    ];

    /// Lowercase singular noun ("patient").
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Patient => "patient",
            EntityKind::Doctor => "doctor",
            EntityKind::Appointment => "appointment",
        }
    }

    /// Lowercase plural noun ("patients").
    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Patient => "patients",
            EntityKind::Doctor => "doctors",
            EntityKind::Appointment => "appointments",
        }
    }

    /// Question asked before a record of this kind is deleted.
    pub fn delete_prompt(&self) -> String {
        format!("Are you sure you want to delete this {}?", self.label())
    }

    /// Placeholder shown by a table with no rows.
    pub fn empty_message(&self) -> String {
        format!("No {} found", self.plural())
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Contract shared by every stored record type.
///
/// A record is built from a draft once its id is known, and later mutated
/// in place by merging a patch. Fields absent from a patch keep their value.
pub trait Record: Clone {
    /// Full field set supplied when adding.
    type Draft;
    /// Partial field set supplied when updating.
    type Patch;

    /// Which collection this record lives in.
    const KIND: EntityKind;

    /// Identifier assigned at creation.
    fn id(&self) -> u32;

    /// Build a record from a draft and its freshly assigned id.
    fn from_draft(id: u32, draft: Self::Draft) -> Self;

    /// Shallow-merge the present fields of `patch`.
    fn apply(&mut self, patch: Self::Patch);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_prompt_names_the_entity() {
        assert_eq!(
            EntityKind::Doctor.delete_prompt(),
            "Are you sure you want to delete this doctor?"
        );
    }

    #[test]
    fn test_empty_message_uses_plural() {
        assert_eq!(EntityKind::Patient.empty_message(), "No patients found");
        assert_eq!(
            EntityKind::Appointment.empty_message(),
            "No appointments found"
        );
    }
}
