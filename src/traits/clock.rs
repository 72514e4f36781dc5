//! Source of the current date.
//!
//! The dashboard decides which appointments are upcoming by comparing them
//! against "today". Reading the date through this trait keeps that decision
//! testable and lets `--today` pin it.

use chrono::NaiveDate;

/// Trait for anything that can report the current calendar date.
///
/// # Example
///
/// ```ignore
/// use hrm::traits::Clock;
/// use hrm::adapters::FixedClock;
///
/// let clock = FixedClock::ymd(2025, 10, 1);
/// assert_eq!(clock.today().to_string(), "2025-10-01");
/// ```
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// The current local date.
    fn today(&self) -> NaiveDate;
}
