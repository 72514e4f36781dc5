//! Command registry for dispatching keyboard input to commands.
//!
//! The [`CommandRegistry`] maps key events to commands based on the current
//! application context. It handles:
//! - Ctrl+C (always quits)
//! - Modal bindings (record form, delete confirmation)
//! - Global bindings (view switching, quit)
//! - Table bindings (row selection, add/edit/delete)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, ModalType};
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Registry for dispatching key events to commands.
///
/// Priority:
/// 1. Ctrl+C - always quits
/// 2. Modal bindings - a modal swallows every other key
/// 3. Global bindings
/// 4. Table bindings - only on the patient, doctor and appointment views
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    /// Creates a new command registry with default keybindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a command registry with a custom keybinding configuration.
    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        if context.is_modal_active() {
            return Some(self.dispatch_modal(key, context));
        }

        let combo = KeyCombo::from_event(&key);
        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(*cmd);
        }

        if context.is_table_view() {
            return self.config.get_table(&combo).copied();
        }

        None
    }

    /// Dispatches input when a modal is active. Unbound keys become `Noop`.
    fn dispatch_modal(&self, key: KeyEvent, context: &InputContext) -> Command {
        let combo = KeyCombo::from_event(&key);
        if let Some(cmd) = self.config.get_modal(context.modal, &combo) {
            return *cmd;
        }

        match (context.modal, key.code) {
            (ModalType::Form, KeyCode::Char(c))
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                if !context.focused_is_choice {
                    Command::FormInsertChar(c)
                } else if c == ' ' {
                    Command::FormNextChoice
                } else {
                    Command::Noop
                }
            }
            _ => Command::Noop,
        }
    }
}
