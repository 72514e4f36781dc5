//! Unified error type for hrm.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::form::FormError;
use super::ui::UiError;

/// Unified error type.
///
/// Consolidates the domain errors so callers can classify, log and display
/// any of them the same way.
#[derive(Debug)]
pub enum HrmError {
    /// Form text that could not be converted.
    Form(FormError),

    /// Unusable flag or environment value.
    Config(ConfigError),

    /// Terminal errors.
    Ui(UiError),

    /// Filesystem errors (log file setup).
    Io(std::io::Error),
}

impl HrmError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HrmError::Form(_) => ErrorCategory::User,
            HrmError::Config(_) => ErrorCategory::Configuration,
            HrmError::Ui(_) | HrmError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            HrmError::Form(err) => err.to_string(),
            HrmError::Config(err) => err.to_string(),
            HrmError::Ui(err) => err.user_message(),
            HrmError::Io(err) => format!("File error: {}", err),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            HrmError::Form(err) => err.error_code(),
            HrmError::Config(err) => err.error_code(),
            HrmError::Ui(err) => err.error_code(),
            HrmError::Io(_) => "E_SYS_IO",
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for HrmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HrmError::Form(err) => write!(f, "{}", err),
            HrmError::Config(err) => write!(f, "{}", err),
            HrmError::Ui(err) => write!(f, "{}", err),
            HrmError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for HrmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HrmError::Form(err) => Some(err),
            HrmError::Config(err) => Some(err),
            HrmError::Ui(err) => Some(err),
            HrmError::Io(err) => Some(err),
        }
    }
}

impl From<FormError> for HrmError {
    fn from(err: FormError) -> Self {
        HrmError::Form(err)
    }
}

impl From<ConfigError> for HrmError {
    fn from(err: ConfigError) -> Self {
        HrmError::Config(err)
    }
}

impl From<UiError> for HrmError {
    fn from(err: UiError) -> Self {
        HrmError::Ui(err)
    }
}

impl From<std::io::Error> for HrmError {
    fn from(err: std::io::Error) -> Self {
        HrmError::Io(err)
    }
}
