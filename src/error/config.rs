//! Configuration errors.

use thiserror::Error;

/// A flag or environment variable that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{source_name} expects a date like 2025-10-30, got '{value}'")]
    InvalidDate { source_name: String, value: String },

    #[error("{source_name} expects a number, got '{value}'")]
    InvalidNumber { source_name: String, value: String },

    #[error("{flag} requires a value")]
    MissingValue { flag: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidDate { .. } => "E_CFG_DATE",
            ConfigError::InvalidNumber { .. } => "E_CFG_NUMBER",
            ConfigError::MissingValue { .. } => "E_CFG_MISSING",
        }
    }
}
