//! Navigation command handlers.
//!
//! Handles view switching and the table commands (row selection and
//! add/edit/delete).

use crate::app::App;
use crate::input::Command;

/// Handles navigation-related commands.
///
/// Returns `true` if the command was handled.
pub fn handle_navigation_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::Quit => {
            app.quit();
            true
        }

        Command::SwitchView(view) => {
            app.switch_view(*view);
            true
        }

        Command::NextView => {
            app.next_view();
            true
        }

        Command::PreviousView => {
            app.previous_view();
            true
        }

        Command::SelectNext => {
            app.select_next();
            true
        }

        Command::SelectPrevious => {
            app.select_previous();
            true
        }

        Command::AddRecord => {
            app.add_record();
            true
        }

        Command::EditSelected => {
            app.edit_selected();
            true
        }

        Command::DeleteSelected => {
            app.delete_selected();
            true
        }

        Command::Noop => true,

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;
    use crate::models::EntityKind;

    #[test]
    fn test_switch_view() {
        let mut app = App::new();
        assert!(handle_navigation_command(
            &mut app,
            &Command::SwitchView(View::Appointments)
        ));
        assert_eq!(app.active_view(), View::Appointments);
    }

    #[test]
    fn test_delete_selected_asks_first() {
        let mut app = App::new();
        app.switch_view(View::Doctors);
        handle_navigation_command(&mut app, &Command::DeleteSelected);

        assert_eq!(app.confirm.map(|c| c.kind), Some(EntityKind::Doctor));
        assert_eq!(app.store.doctors.len(), 2);
    }

    #[test]
    fn test_form_commands_are_not_handled() {
        let mut app = App::new();
        assert!(!handle_navigation_command(&mut app, &Command::FormSave));
    }
}
