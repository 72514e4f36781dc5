//! File-backed tracing setup.
//!
//! The TUI owns stdout, so log lines go to `hrm.log` under the platform's
//! local data directory (or the temp directory when there is none).

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, DEFAULT_LOG_FILTER};
use crate::error::HrmResult;

const LOG_DIR: &str = "hrm";
const LOG_FILE: &str = "hrm.log";

/// Where the log file lives for this user.
pub fn log_path() -> PathBuf {
    log_path_in(&dirs::data_local_dir().unwrap_or_else(std::env::temp_dir))
}

fn log_path_in(base: &Path) -> PathBuf {
    base.join(LOG_DIR).join(LOG_FILE)
}

/// Parse the configured filter, falling back to the default on bad input.
fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber and return the log file path.
///
/// Calling this twice is harmless: the second subscriber is dropped.
pub fn init_logging(config: &AppConfig) -> HrmResult<PathBuf> {
    let path = log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(version = crate::cli::VERSION, path = %path.display(), "logging started");
    }
    Ok(path)
}
