//! Input handling module for keyboard and command processing.
//!
//! All keyboard input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Dispatched to the appropriate handler in the [`handlers`] module
//!
//! # Architecture
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> Handler -> App mutation
//! ```
//!
//! Mouse clicks take the parallel route through
//! [`crate::ui::interaction::handle_click_action`].
//!
//! # Modules
//!
//! - [`command`] - The [`Command`] enum with all possible user actions
//! - [`context`] - [`InputContext`] for tracking current UI state
//! - [`registry`] - [`CommandRegistry`] for mapping keys to commands
//! - [`keybindings`] - Default key binding configuration
//! - [`handlers`] - Command execution handlers

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crate::app::App;
use crate::forms::FormController;

impl App {
    /// Builds an InputContext from the current application state.
    pub fn build_input_context(&self) -> InputContext {
        let ctx = InputContext::new().with_view(self.active_view());

        if self.confirm.is_some() {
            return ctx.with_modal(ModalType::Confirm);
        }

        match self.open_form() {
            Some(form) => ctx
                .with_modal(ModalType::Form)
                .with_choice_focused(form.state().focused().is_some_and(|f| f.is_choice())),
            None => ctx,
        }
    }

    /// Executes a command, returning whether any handler accepted it.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        tracing::debug!(?cmd, "execute_command");

        if cmd.marks_dirty() {
            self.mark_dirty();
        }

        if cmd.is_quit() {
            self.quit();
            return true;
        }

        match self.build_input_context().modal {
            ModalType::Confirm => handlers::handle_confirm_command(self, &cmd),
            ModalType::Form => handlers::handle_form_command(self, &cmd),
            ModalType::None => handlers::handle_navigation_command(self, &cmd),
        }
    }
}
