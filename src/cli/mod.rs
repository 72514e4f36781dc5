//! CLI module for hrm.
//!
//! Flags are handled before the terminal is touched:
//!
//! ```ignore
//! use hrm::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&command) {
//!     // A non-TUI command ran; exit with its result.
//!     return result;
//! }
//! // CliCommand::RunTui: continue to the TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, usage, CliCommand, CliOptions};
pub use version::{version_line, VERSION};

use color_eyre::Result;
use serde::Serialize;

use crate::models::{Appointment, Doctor, Patient};
use crate::store::seed_store;

#[derive(Serialize)]
struct SeedDump<'a> {
    patients: &'a [Patient],
    doctors: &'a [Doctor],
    appointments: &'a [Appointment],
}

/// Serialize the sample records the TUI starts with.
pub fn seed_json() -> serde_json::Result<String> {
    let store = seed_store();
    serde_json::to_string_pretty(&SeedDump {
        patients: store.patients.list(),
        doctors: store.doctors.list(),
        appointments: store.appointments.list(),
    })
}

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            print!("{}", usage());
            Some(Ok(()))
        }
        CliCommand::PrintSeed => Some(
            seed_json()
                .map(|json| println!("{}", json))
                .map_err(Into::into),
        ),
        CliCommand::RunTui(_) => None,
    }
}
