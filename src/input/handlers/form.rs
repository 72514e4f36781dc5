//! Record form command handlers.

use crate::app::App;
use crate::input::Command;

/// Handles commands aimed at the open record form.
///
/// Returns `true` if the command was handled. Returns `false` when no form
/// is open.
pub fn handle_form_command(app: &mut App, cmd: &Command) -> bool {
    let Some(kind) = app.open_form_kind() else {
        return false;
    };

    match cmd {
        Command::FormSave => {
            // A rejected save keeps the form open with the error shown inline.
            let _ = app.save_form();
            true
        }

        Command::FormCancel => {
            app.close_form();
            true
        }

        Command::FormInsertChar(c) => {
            app.form_mut(kind).state_mut().insert_char(*c);
            true
        }

        Command::FormBackspace => {
            app.form_mut(kind).state_mut().backspace();
            true
        }

        Command::FormNextField => {
            app.form_mut(kind).state_mut().focus_next();
            true
        }

        Command::FormPreviousField => {
            app.form_mut(kind).state_mut().focus_previous();
            true
        }

        Command::FormNextChoice => {
            app.form_mut(kind).state_mut().next_choice();
            true
        }

        Command::FormPreviousChoice => {
            app.form_mut(kind).state_mut().previous_choice();
            true
        }

        Command::Noop => true,

        _ => false,
    }
}
