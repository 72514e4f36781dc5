//! Input context for determining which commands are available.
//!
//! The [`InputContext`] captures the application state relevant to input
//! handling, so the command registry can pick bindings for the active modal
//! and view.

use crate::app::View;

/// The type of modal dialog currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    /// No modal dialog is active
    #[default]
    None,
    /// A record form is open
    Form,
    /// A delete confirmation is pending
    Confirm,
}

/// Context information for input handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputContext {
    /// Active view
    pub view: View,
    /// Current modal type (if any)
    pub modal: ModalType,
    /// Whether the focused form field is a picker rather than a text input
    pub focused_is_choice: bool,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the view.
    pub fn with_view(mut self, view: View) -> Self {
        self.view = view;
        self
    }

    /// Builder method to set the modal type.
    pub fn with_modal(mut self, modal: ModalType) -> Self {
        self.modal = modal;
        self
    }

    /// Builder method to mark the focused form field as a picker.
    pub fn with_choice_focused(mut self, is_choice: bool) -> Self {
        self.focused_is_choice = is_choice;
        self
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }

    /// Whether the active view lists records.
    pub fn is_table_view(&self) -> bool {
        self.view.entity().is_some()
    }
}
