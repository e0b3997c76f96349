//! Recurrence rule parsing and next-date evaluation.
//!
//! This is the scheduling core of the server: given a reference date, a base
//! date, and a compact rule string (`"d 5"`, `"y"`, `"w 1,3"`,
//! `"m -1,15 2,8"`), it computes the next occurrence date. The module is split
//! into parse-time validation (`rule`) and evaluate-time date math (`eval`);
//! both phases are pure and keep no state between calls.

mod date;
mod eval;
mod rule;

pub use date::{days_in_month, format_compact, local_date_today, parse_compact};
pub use rule::{RecurrenceError, RecurrenceRule};

/// Compute the next occurrence date from boundary strings.
///
/// `now` and `date` are `YYYYMMDD` strings; `repeat` is a recurrence rule.
/// Returns the next occurrence in the same `YYYYMMDD` form, or the specific
/// validation failure. An empty `repeat` is rejected with
/// [`RecurrenceError::EmptyRule`]; callers that treat "no recurrence" as a
/// normal state must check for it before calling.
pub fn next_date(now: &str, date: &str, repeat: &str) -> Result<String, RecurrenceError> {
    if repeat.is_empty() {
        return Err(RecurrenceError::EmptyRule);
    }
    let now = parse_compact(now)?;
    let base = parse_compact(date)?;
    let rule: RecurrenceRule = repeat.parse()?;
    Ok(format_compact(rule.next_occurrence(now, base)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_date_interval() {
        assert_eq!(next_date("20240115", "20240110", "d 5").unwrap(), "20240115");
        assert_eq!(next_date("20240116", "20240110", "d 5").unwrap(), "20240120");
    }

    #[test]
    fn test_next_date_yearly() {
        assert_eq!(next_date("20240301", "20240115", "y").unwrap(), "20250115");
    }

    #[test]
    fn test_next_date_weekly() {
        // 2024-03-04 is a Monday
        assert_eq!(next_date("20240304", "20240101", "w 1,3").unwrap(), "20240306");
    }

    #[test]
    fn test_next_date_monthly() {
        assert_eq!(next_date("20230116", "20230115", "m 31,-1 2").unwrap(), "20230228");
    }

    #[test]
    fn test_next_date_empty_rule() {
        assert_eq!(
            next_date("20240115", "20240110", "").unwrap_err(),
            RecurrenceError::EmptyRule
        );
    }

    #[test]
    fn test_next_date_invalid_now() {
        assert_eq!(
            next_date("2024", "20240110", "d 5").unwrap_err(),
            RecurrenceError::InvalidDate("2024".to_string())
        );
    }

    #[test]
    fn test_next_date_invalid_base() {
        assert_eq!(
            next_date("20240115", "20240230", "d 5").unwrap_err(),
            RecurrenceError::InvalidDate("20240230".to_string())
        );
    }

    #[test]
    fn test_next_date_invalid_rule() {
        assert_eq!(
            next_date("20240115", "20240110", "q 5").unwrap_err(),
            RecurrenceError::InvalidRule("q 5".to_string())
        );
        assert_eq!(
            next_date("20240115", "20240110", "d 500").unwrap_err(),
            RecurrenceError::InvalidInterval("500".to_string())
        );
    }

    #[test]
    fn test_date_errors_take_precedence_over_rule_errors() {
        // boundary dates are validated before the rule text
        assert_eq!(
            next_date("bogus", "20240110", "q 5").unwrap_err(),
            RecurrenceError::InvalidDate("bogus".to_string())
        );
    }
}
