//! Type definitions for the application state.
//!
//! - [`View`] - Which logical view is displayed
//! - [`PendingDelete`] - A delete waiting for confirmation
//! - [`RowAction`] - The per-row buttons of a table

use crate::models::EntityKind;

/// The four views reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Dashboard,
    Patients,
    Doctors,
    Appointments,
}

impl View {
    /// Views in navigation order.
    pub const ALL: [View; 4] = [
        View::Dashboard,
        View::Patients,
        View::Doctors,
        View::Appointments,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Patients => "Patients",
            View::Doctors => "Doctors",
            View::Appointments => "Appointments",
        }
    }

    /// Entity listed by this view, `None` for the dashboard.
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            View::Dashboard => None,
            View::Patients => Some(EntityKind::Patient),
            View::Doctors => Some(EntityKind::Doctor),
            View::Appointments => Some(EntityKind::Appointment),
        }
    }

    pub fn for_entity(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Patient => View::Patients,
            EntityKind::Doctor => View::Doctors,
            EntityKind::Appointment => View::Appointments,
        }
    }

    /// Position in [`View::ALL`].
    pub fn index(&self) -> usize {
        match self {
            View::Dashboard => 0,
            View::Patients => 1,
            View::Doctors => 2,
            View::Appointments => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A delete that is waiting for the user to confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDelete {
    pub kind: EntityKind,
    pub id: u32,
}

impl PendingDelete {
    pub fn prompt(&self) -> String {
        self.kind.delete_prompt()
    }
}

/// Buttons rendered on every table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}
