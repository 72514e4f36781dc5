//! Error handling for hrm.
//!
//! - **Error Categories**: coarse classification used for logging and display
//! - **Domain errors**: form conversion, configuration, and terminal/UI errors
//! - **Unified Error Type**: `HrmError` wraps them all
//! - **Result Type Alias**: `HrmResult<T>`
//!
//! Store operations never fail: updating or removing an unknown id is a
//! silent no-op. Errors only arise at the edges, when text typed into a
//! form is converted into typed values, when configuration is read, or when
//! the terminal misbehaves.
//!
//! | Category | Description |
//! |----------|-------------|
//! | User | Form input that needs correcting |
//! | Configuration | Bad flag or environment value |
//! | System | Terminal or filesystem trouble |

mod category;
mod config;
mod form;
mod hrm_error;
mod result;
mod ui;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use form::FormError;
pub use hrm_error::HrmError;
pub use result::HrmResult;
pub use ui::UiError;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_error_unification() {
        let form_err: HrmError = FormError::Required { field: "Name" }.into();
        let config_err: HrmError = ConfigError::InvalidDate {
            source_name: "--today".to_string(),
            value: "tomorrow".to_string(),
        }
        .into();
        let ui_err: HrmError = UiError::TerminalInitFailed {
            message: "no tty".to_string(),
        }
        .into();

        assert_eq!(form_err.category(), ErrorCategory::User);
        assert_eq!(config_err.category(), ErrorCategory::Configuration);
        assert_eq!(ui_err.category(), ErrorCategory::System);

        for err in [&form_err, &config_err, &ui_err] {
            assert!(!err.error_code().is_empty());
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: HrmError = io_err.into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.error_code(), "E_SYS_IO");
    }

    #[test]
    fn test_result_alias_with_question_mark() {
        fn parse_age(text: &str) -> HrmResult<u32> {
            let age = text.parse::<u32>().map_err(|_| FormError::InvalidNumber {
                field: "Age",
                value: text.to_string(),
            })?;
            Ok(age)
        }

        assert_eq!(parse_age("40").unwrap(), 40);
        let err = parse_age("forty").unwrap_err();
        assert!(matches!(err, HrmError::Form(FormError::InvalidNumber { .. })));
    }
}
