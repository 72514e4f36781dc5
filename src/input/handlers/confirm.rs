//! Delete confirmation command handlers.

use crate::app::App;
use crate::input::Command;

/// Handles the yes/no answer to a pending delete.
///
/// Returns `true` if the command was handled.
pub fn handle_confirm_command(app: &mut App, cmd: &Command) -> bool {
    if app.confirm.is_none() {
        return false;
    }

    match cmd {
        Command::ConfirmYes => {
            app.resolve_confirmation(true);
            true
        }
        Command::ConfirmNo => {
            app.resolve_confirmation(false);
            true
        }
        Command::Noop => true,
        _ => false,
    }
}
