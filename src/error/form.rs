//! Errors raised while turning form text into record values.

use thiserror::Error;

/// A form field whose text could not be accepted.
///
/// Every variant names the field by its label so the form can show the
/// message next to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be a date like 2025-10-30, got '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("{field} must be a time like 14:30, got '{value}'")]
    InvalidTime { field: &'static str, value: String },

    #[error("Select a {field}")]
    NothingSelected { field: &'static str },
}

impl FormError {
    /// Label of the field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            FormError::Required { field }
            | FormError::InvalidNumber { field, .. }
            | FormError::InvalidDate { field, .. }
            | FormError::InvalidTime { field, .. }
            | FormError::NothingSelected { field } => field,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            FormError::Required { .. } => "E_FORM_REQUIRED",
            FormError::InvalidNumber { .. } => "E_FORM_NUMBER",
            FormError::InvalidDate { .. } => "E_FORM_DATE",
            FormError::InvalidTime { .. } => "E_FORM_TIME",
            FormError::NothingSelected { .. } => "E_FORM_SELECT",
        }
    }
}
