//! Clock implementations.

use chrono::{Local, NaiveDate};

use crate::traits::Clock;

/// Reads the date from the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
///
/// Used by tests and by `--today` / `HRM_TODAY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Build from year, month and day. Out-of-range parts fall back to the
    /// Unix epoch date.
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self::new(NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default())
    }

    /// Move the pinned date.
    pub fn set(&mut self, date: NaiveDate) {
        self.date = date;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
