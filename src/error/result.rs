//! Result type alias for hrm operations.

use super::hrm_error::HrmError;

/// Type alias for Results using `HrmError`.
///
/// # Example
///
/// ```ignore
/// use hrm::error::HrmResult;
///
/// fn load_config() -> HrmResult<AppConfig> {
///     let config = AppConfig::from_env()?;
///     Ok(config)
/// }
/// ```
pub type HrmResult<T> = Result<T, HrmError>;
