//! Whether a form is creating a record or editing one.

/// Edit-session state of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    /// Saving creates a new record.
    #[default]
    Adding,
    /// Saving merges into the record with this id.
    Editing(u32),
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }

    pub fn editing_id(&self) -> Option<u32> {
        match self {
            EditSession::Editing(id) => Some(*id),
            EditSession::Adding => None,
        }
    }
}

impl From<Option<u32>> for EditSession {
    fn from(id: Option<u32>) -> Self {
        id.map_or(EditSession::Adding, EditSession::Editing)
    }
}
