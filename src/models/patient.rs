//! Patient records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::{EntityKind, Record};

/// Gender as offered by the patient form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    /// Options in the order the form cycles through them.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!(
                "Invalid gender: '{}'. Must be one of: Male, Female, Other",
                s
            )),
        }
    }
}

/// A patient as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub contact: String,
    /// Free-text medical history; empty when none was entered.
    #[serde(default)]
    pub history: String,
}

impl Patient {
    /// History as shown in tables.
    pub fn history_display(&self) -> &str {
        if self.history.is_empty() {
            "N/A"
        } else {
            &self.history
        }
    }
}

/// Every patient field, used when adding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientDraft {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub contact: String,
    pub history: String,
}

/// Fields to merge into an existing patient.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientPatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub contact: Option<String>,
    pub history: Option<String>,
}

impl From<PatientDraft> for PatientPatch {
    fn from(draft: PatientDraft) -> Self {
        Self {
            name: Some(draft.name),
            age: Some(draft.age),
            gender: Some(draft.gender),
            contact: Some(draft.contact),
            history: Some(draft.history),
        }
    }
}

impl Record for Patient {
    type Draft = PatientDraft;
    type Patch = PatientPatch;

    const KIND: EntityKind = EntityKind::Patient;

    fn id(&self) -> u32 {
        self.id
    }

    fn from_draft(id: u32, draft: PatientDraft) -> Self {
        Self {
            id,
            name: draft.name,
            age: draft.age,
            gender: draft.gender,
            contact: draft.contact,
            history: draft.history,
        }
    }

    fn apply(&mut self, patch: PatientPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
        if let Some(history) = patch.history {
            self.history = history;
        }
    }
}
