//! Command-line argument parsing for hrm.

use chrono::NaiveDate;

use crate::error::ConfigError;
use crate::models::parse_date;

/// Flags that shape a TUI run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// `--today YYYY-MM-DD`
    pub today: Option<NaiveDate>,
    /// `--empty`
    pub empty: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the sample records as JSON
    PrintSeed,
    /// Run the TUI application (default)
    RunTui(CliOptions),
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first argument is the program name and is skipped. `--version`,
/// `--help` and `--print-seed` return immediately; unknown arguments are
/// ignored.
///
/// # Examples
///
/// ```
/// use hrm::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["hrm".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--print-seed" => return Ok(CliCommand::PrintSeed),
            "--empty" => options.empty = true,
            "--today" => {
                let value = args.next().ok_or_else(|| ConfigError::MissingValue {
                    flag: "--today".to_string(),
                })?;
                options.today = Some(parse_today(&value)?);
            }
            other => {
                if let Some(value) = other.strip_prefix("--today=") {
                    options.today = Some(parse_today(value)?);
                }
            }
        }
    }

    Ok(CliCommand::RunTui(options))
}

fn parse_today(value: &str) -> Result<NaiveDate, ConfigError> {
    parse_date(value).ok_or_else(|| ConfigError::InvalidDate {
        source_name: "--today".to_string(),
        value: value.to_string(),
    })
}

/// Usage text printed by `--help`.
pub fn usage() -> String {
    format!(
        "hrm {}\n\
         Manage patients, doctors and appointments in the terminal.\n\n\
         USAGE:\n    hrm [OPTIONS]\n\n\
         OPTIONS:\n\
         \x20   --today <YYYY-MM-DD>  Treat this date as today on the dashboard\n\
         \x20   --empty               Start without the sample records\n\
         \x20   --print-seed          Print the sample records as JSON and exit\n\
         \x20   -V, --version         Print version and exit\n\
         \x20   -h, --help            Print this help and exit\n\n\
         ENVIRONMENT:\n\
         \x20   HRM_TODAY, HRM_NO_SEED, HRM_LOG, HRM_TICK_MS\n",
        super::VERSION
    )
}
