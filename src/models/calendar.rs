//! Date and time formatting shared by forms and tables.

use chrono::{NaiveDate, NaiveTime};

/// Format accepted by the date input.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Format accepted by the time input.
pub const TIME_INPUT_FORMAT: &str = "%H:%M";

/// Short display form, e.g. "Oct 30, 2025".
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Time of day as `HH:MM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_INPUT_FORMAT).to_string()
}

/// Date in input form, `YYYY-MM-DD`.
pub fn format_input_date(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_INPUT_FORMAT).ok()
}

pub fn parse_time(input: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), TIME_INPUT_FORMAT).ok()
}
