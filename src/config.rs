//! Runtime configuration.
//!
//! Settings come from three layers, later ones winning:
//! 1. built-in defaults
//! 2. environment variables (`HRM_TODAY`, `HRM_NO_SEED`, `HRM_LOG`, `HRM_TICK_MS`)
//! 3. command-line flags (`--today`, `--empty`)

use chrono::NaiveDate;

use crate::cli::CliOptions;
use crate::error::ConfigError;
use crate::models::parse_date;

pub const ENV_TODAY: &str = "HRM_TODAY";
pub const ENV_NO_SEED: &str = "HRM_NO_SEED";
pub const ENV_LOG: &str = "HRM_LOG";
pub const ENV_TICK_MS: &str = "HRM_TICK_MS";

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default interval between ticks of the event loop.
pub const DEFAULT_TICK_MS: u64 = 250;

/// Configuration for one run of the TUI.
///
/// Use the builder methods to customize:
///
/// ```ignore
/// use hrm::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_seed(false)
///     .with_tick_ms(100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Pinned "today" for the dashboard; `None` reads the system clock.
    pub today: Option<NaiveDate>,
    /// Load the sample records at startup.
    pub seed: bool,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    /// Milliseconds between event-loop ticks.
    pub tick_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            today: None,
            seed: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms.max(1);
        self
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`, which maps a variable
    /// name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_TODAY).filter(|v| !v.trim().is_empty()) {
            let today = parse_date(&value).ok_or_else(|| ConfigError::InvalidDate {
                source_name: ENV_TODAY.to_string(),
                value: value.clone(),
            })?;
            config = config.with_today(today);
        }

        if let Some(value) = lookup(ENV_NO_SEED) {
            config = config.with_seed(!is_truthy(&value));
        }

        if let Some(value) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            config = config.with_log_filter(value);
        }

        if let Some(value) = lookup(ENV_TICK_MS).filter(|v| !v.trim().is_empty()) {
            let tick_ms = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    source_name: ENV_TICK_MS.to_string(),
                    value: value.clone(),
                })?;
            config = config.with_tick_ms(tick_ms);
        }

        Ok(config)
    }

    /// Apply command-line flags on top of this configuration.
    pub fn merge_cli(mut self, options: &CliOptions) -> Self {
        if let Some(today) = options.today {
            self.today = Some(today);
        }
        if options.empty {
            self.seed = false;
        }
        self
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
