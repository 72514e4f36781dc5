//! Error category classification.

use std::fmt;

/// High-level categorization of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Input the user can correct (a form field, a picker selection).
    User,

    /// A flag or environment variable holds an unusable value.
    Configuration,

    /// Terminal or filesystem trouble outside the user's control.
    System,
}

impl ErrorCategory {
    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::User => "user",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
        }
    }

    /// Suggested next step for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::User => "Correct the highlighted field and save again.",
            ErrorCategory::Configuration => "Check the command-line flags and HRM_* environment variables.",
            ErrorCategory::System => "Restart hrm; if the terminal looks broken, run `reset`.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
