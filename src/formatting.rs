//! Formatting helper functions for the recurrence MCP server
//!
//! This module contains formatting logic for rule descriptions and upcoming
//! schedule output.

use chrono::NaiveDate;

use crate::recurrence::{RecurrenceRule, format_compact};

/// Weekday name for the engine's 0 = Sunday through 6 = Saturday numbering
fn weekday_name(weekday: u8) -> &'static str {
    match weekday {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "unknown",
    }
}

fn month_name(month: u8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "unknown",
    }
}

fn month_day_text(day: i8) -> String {
    match day {
        -1 => "the last day".to_string(),
        -2 => "the second to last day".to_string(),
        _ => format!("day {}", day),
    }
}

fn join_names(names: Vec<String>) -> String {
    names.join(", ")
}

/// Describe a parsed rule in plain words
///
/// # Arguments
/// * `rule` - The rule to describe
///
/// # Returns
/// A short human-readable sentence fragment, e.g. "repeats every 5 days"
pub fn describe_rule(rule: &RecurrenceRule) -> String {
    match rule {
        RecurrenceRule::Interval { days: 1 } => "repeats every day".to_string(),
        RecurrenceRule::Interval { days } => format!("repeats every {} days", days),
        RecurrenceRule::Yearly => "repeats every year on the same date".to_string(),
        RecurrenceRule::Weekly { weekdays } => {
            let names = weekdays
                .iter()
                .map(|&d| weekday_name(d).to_string())
                .collect();
            format!("repeats weekly on {}", join_names(names))
        }
        RecurrenceRule::Monthly { days, months } => {
            let day_names = days.iter().map(|&d| month_day_text(d)).collect();
            if months.is_empty() {
                format!("repeats monthly on {}", join_names(day_names))
            } else {
                let month_names = months.iter().map(|&m| month_name(m).to_string()).collect();
                format!(
                    "repeats on {} in {}",
                    join_names(day_names),
                    join_names(month_names)
                )
            }
        }
    }
}

/// Format a list of upcoming occurrence dates into a display string
///
/// # Arguments
/// * `dates` - Occurrence dates, earliest first
///
/// # Returns
/// Formatted string representation of the schedule
pub fn format_schedule(dates: &[NaiveDate]) -> String {
    if dates.is_empty() {
        return "No upcoming dates".to_string();
    }

    let mut result = format!("Found {} upcoming date(s):\n\n", dates.len());
    for date in dates {
        result.push_str(&format!(
            "- {} ({})\n",
            format_compact(*date),
            date.format("%A, %Y-%m-%d")
        ));
    }

    result
}
