//! Recurrence rule type, parsing, and canonical serialization.
//!
//! A rule string is parsed fresh on every evaluation; only the source string
//! is ever stored by callers. The grammar:
//!
//! ```text
//! rule        := interval | yearly | weekly | monthly
//! interval    := "d" SP days            ; days: integer 1..400
//! yearly      := "y"
//! weekly      := "w" SP weekday_list    ; comma-separated ints, 1..7 (7 = Sunday)
//! monthly     := "m" SP day_list [SP month_list]
//! day_list    := comma-separated ints in {-2,-1} or 1..31, never 0
//! month_list  := comma-separated ints in 1..12
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures reported by the recurrence engine.
///
/// Every variant is a local validation failure reported to the immediate
/// caller; the engine never substitutes a fallback date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecurrenceError {
    /// The rule string is empty. Callers treat "no recurrence" as a normal
    /// task state, so this is surfaced distinctly from real parse failures.
    #[error("recurrence rule is empty")]
    EmptyRule,
    /// A boundary date failed to parse as `YYYYMMDD`.
    #[error("invalid date '{0}': expected YYYYMMDD")]
    InvalidDate(String),
    /// Unrecognized rule kind, or the wrong token count for a known kind.
    #[error("invalid recurrence rule '{0}'")]
    InvalidRule(String),
    #[error("invalid repeat interval '{0}': expected a number of days from 1 to 400")]
    InvalidInterval(String),
    #[error("invalid weekday '{0}': expected values from 1 (Monday) to 7 (Sunday)")]
    InvalidWeekday(String),
    #[error("invalid day of month '{0}': expected 1 to 31, -1 or -2")]
    InvalidMonthDay(String),
    #[error("invalid month '{0}': expected values from 1 to 12")]
    InvalidMonth(String),
}

/// A parsed recurrence rule.
///
/// The four kinds a task can repeat on. Parsing normalizes list components:
/// sorted ascending, duplicates removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrenceRule {
    /// `d <n>` - repeat every `n` days
    Interval { days: u16 },
    /// `y` - repeat every year on the same month and day
    Yearly,
    /// `w <list>` - repeat on a set of weekdays, stored as 0 = Sunday
    /// through 6 = Saturday
    Weekly { weekdays: Vec<u8> },
    /// `m <days> [<months>]` - repeat on days of the month. Positive days
    /// count from the month start, -1 and -2 from the month end. An empty
    /// month set means every month.
    Monthly { days: Vec<i8>, months: Vec<u8> },
}

impl FromStr for RecurrenceRule {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(RecurrenceError::EmptyRule);
        }
        let tokens: Vec<&str> = s.split(' ').collect();
        match tokens[0] {
            "d" => {
                if tokens.len() != 2 {
                    return Err(RecurrenceError::InvalidRule(s.to_string()));
                }
                let days = tokens[1]
                    .parse::<u16>()
                    .ok()
                    .filter(|d| (1..=400).contains(d))
                    .ok_or_else(|| RecurrenceError::InvalidInterval(tokens[1].to_string()))?;
                Ok(RecurrenceRule::Interval { days })
            }
            "y" => {
                if tokens.len() != 1 {
                    return Err(RecurrenceError::InvalidRule(s.to_string()));
                }
                Ok(RecurrenceRule::Yearly)
            }
            "w" => {
                if tokens.len() != 2 {
                    return Err(RecurrenceError::InvalidRule(s.to_string()));
                }
                let mut weekdays = Vec::new();
                for part in tokens[1].split(',') {
                    let day = part
                        .parse::<u8>()
                        .ok()
                        .filter(|d| (1..=7).contains(d))
                        .ok_or_else(|| RecurrenceError::InvalidWeekday(part.to_string()))?;
                    // 7 means Sunday, which chrono counts as weekday 0
                    weekdays.push(if day == 7 { 0 } else { day });
                }
                weekdays.sort_unstable();
                weekdays.dedup();
                Ok(RecurrenceRule::Weekly { weekdays })
            }
            "m" => {
                if tokens.len() != 2 && tokens.len() != 3 {
                    return Err(RecurrenceError::InvalidRule(s.to_string()));
                }
                let mut days = Vec::new();
                for part in tokens[1].split(',') {
                    let day = part
                        .parse::<i8>()
                        .ok()
                        .filter(|d| matches!(*d, -2 | -1 | 1..=31))
                        .ok_or_else(|| RecurrenceError::InvalidMonthDay(part.to_string()))?;
                    days.push(day);
                }
                days.sort_unstable();
                days.dedup();
                let mut months = Vec::new();
                if tokens.len() == 3 {
                    for part in tokens[2].split(',') {
                        let month = part
                            .parse::<u8>()
                            .ok()
                            .filter(|m| (1..=12).contains(m))
                            .ok_or_else(|| RecurrenceError::InvalidMonth(part.to_string()))?;
                        months.push(month);
                    }
                    months.sort_unstable();
                    months.dedup();
                }
                Ok(RecurrenceRule::Monthly { days, months })
            }
            _ => Err(RecurrenceError::InvalidRule(s.to_string())),
        }
    }
}

impl fmt::Display for RecurrenceRule {
    /// Canonical rule form: sorted, deduplicated components, Sunday written
    /// back as `7`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrenceRule::Interval { days } => write!(f, "d {}", days),
            RecurrenceRule::Yearly => write!(f, "y"),
            RecurrenceRule::Weekly { weekdays } => {
                let mut listed: Vec<u8> =
                    weekdays.iter().map(|&d| if d == 0 { 7 } else { d }).collect();
                listed.sort_unstable();
                write!(f, "w {}", join_list(&listed))
            }
            RecurrenceRule::Monthly { days, months } => {
                write!(f, "m {}", join_list(days))?;
                if !months.is_empty() {
                    write!(f, " {}", join_list(months))?;
                }
                Ok(())
            }
        }
    }
}

fn join_list<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
