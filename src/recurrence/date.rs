//! Compact date codec and calendar helpers.
//!
//! All dates crossing the engine boundary use the fixed 8-digit `YYYYMMDD`
//! form with no separators. Inside the engine everything is a `NaiveDate`.

use chrono::{Local, NaiveDate};

use super::rule::RecurrenceError;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a date in compact `YYYYMMDD` form.
///
/// Rejects anything that is not exactly 8 ASCII digits, and digit strings
/// that do not name a real calendar day (e.g. `20240230`).
pub fn parse_compact(s: &str) -> Result<NaiveDate, RecurrenceError> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RecurrenceError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, "%Y%m%d").map_err(|_| RecurrenceError::InvalidDate(s.to_string()))
}

/// Format a date in compact `YYYYMMDD` form.
pub fn format_compact(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
    }
}
