//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum is the set of user actions a key can trigger,
//! decoupling key bindings from their effects.

use crate::app::View;

/// Represents all possible commands that can be triggered by keyboard input.
///
/// Commands are organized into categories:
/// - Global commands (quit, view switching)
/// - Table commands (row selection, add/edit/delete)
/// - Form commands (typing, focus, pickers, save/cancel)
/// - Confirmation commands (yes/no)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,
    /// Show a specific view (1-4)
    SwitchView(View),
    /// Show the next view (Tab)
    NextView,
    /// Show the previous view (Shift+Tab)
    PreviousView,

    // =========================================================================
    // Table Commands
    // =========================================================================
    /// Move the row cursor down (Down, j)
    SelectNext,
    /// Move the row cursor up (Up, k)
    SelectPrevious,
    /// Open an empty form for the active table (a)
    AddRecord,
    /// Edit the selected row (e, Enter)
    EditSelected,
    /// Delete the selected row after confirmation (d, Delete)
    DeleteSelected,

    // =========================================================================
    // Form Commands
    // =========================================================================
    /// Type a character into the focused field
    FormInsertChar(char),
    /// Delete the last character of the focused field
    FormBackspace,
    /// Focus the next field (Tab, Down)
    FormNextField,
    /// Focus the previous field (Shift+Tab, Up)
    FormPreviousField,
    /// Next option of the focused picker (Right, Space)
    FormNextChoice,
    /// Previous option of the focused picker (Left)
    FormPreviousChoice,
    /// Save the form (Enter)
    FormSave,
    /// Close the form without saving (Esc)
    FormCancel,

    // =========================================================================
    // Confirmation Commands
    // =========================================================================
    /// Confirm the pending delete (y, Enter)
    ConfirmYes,
    /// Decline the pending delete (n, Esc)
    ConfirmNo,

    /// No operation (used when key should be ignored)
    Noop,
}

impl Command {
    /// Returns true if this command should mark the app as dirty (needs redraw).
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Command::Quit)
    }

    /// Returns a human-readable description of the command.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "Quit application",
            Command::SwitchView(_) => "Switch view",
            Command::NextView => "Next view",
            Command::PreviousView => "Previous view",
            Command::SelectNext => "Move selection down",
            Command::SelectPrevious => "Move selection up",
            Command::AddRecord => "Add record",
            Command::EditSelected => "Edit selected record",
            Command::DeleteSelected => "Delete selected record",
            Command::FormInsertChar(_) => "Insert character",
            Command::FormBackspace => "Delete previous character",
            Command::FormNextField => "Next field",
            Command::FormPreviousField => "Previous field",
            Command::FormNextChoice => "Next option",
            Command::FormPreviousChoice => "Previous option",
            Command::FormSave => "Save form",
            Command::FormCancel => "Cancel form",
            Command::ConfirmYes => "Confirm delete",
            Command::ConfirmNo => "Keep record",
            Command::Noop => "No operation",
        }
    }
}
