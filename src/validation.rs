//! Validation helper functions for the recurrence MCP server
//!
//! This module contains validation logic for tool parameters: compact date
//! strings and the occurrence-count limit for schedule previews.

use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

use crate::recurrence::{format_compact, local_date_today, parse_compact};

/// Most occurrence dates a single preview may return
pub const UPCOMING_LIMIT: usize = 15;

/// Occurrences returned when no count is requested
pub const UPCOMING_DEFAULT: usize = 5;

/// Parse and validate a compact date parameter
///
/// # Arguments
/// * `date_str` - Date string in YYYYMMDD format
///
/// # Returns
/// Result containing parsed NaiveDate or error
pub fn parse_date_param(date_str: &str) -> McpResult<NaiveDate> {
    parse_compact(date_str).map_err(|_| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
            format!(
                "Invalid date '{}'. Use YYYYMMDD (e.g., '20250315')",
                date_str
            ),
            true,
        )
    })
}

/// Resolve the optional reference date to a compact string, defaulting to
/// today in the host's local calendar. The value is validated later by the
/// engine together with the base date.
pub fn now_or_today(now: Option<String>) -> String {
    now.unwrap_or_else(|| format_compact(local_date_today()))
}

/// Parse and validate the preview count parameter
///
/// # Arguments
/// * `count_str` - Requested number of occurrences, if any
///
/// # Returns
/// Result containing the count or an error for non-numeric or out-of-range
/// input
pub fn parse_count_param(count_str: Option<&str>) -> McpResult<usize> {
    let Some(count_str) = count_str else {
        return Ok(UPCOMING_DEFAULT);
    };
    match count_str.parse::<usize>() {
        Ok(count) if (1..=UPCOMING_LIMIT).contains(&count) => Ok(count),
        _ => Err(
            mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
                format!(
                    "Invalid count '{}'. Expected a number from 1 to {}",
                    count_str, UPCOMING_LIMIT
                ),
                true,
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_date_param() {
        let date = parse_date_param("20240315").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 15));

        assert!(parse_date_param("2024-03-15").is_err());
        assert!(parse_date_param("20240231").is_err());
    }

    #[test]
    fn test_now_or_today_passthrough() {
        assert_eq!(now_or_today(Some("20240101".to_string())), "20240101");
    }

    #[test]
    fn test_now_or_today_defaults_to_today() {
        assert_eq!(now_or_today(None), format_compact(local_date_today()));
    }

    #[test]
    fn test_parse_count_param() {
        assert_eq!(parse_count_param(None).unwrap(), UPCOMING_DEFAULT);
        assert_eq!(parse_count_param(Some("1")).unwrap(), 1);
        assert_eq!(parse_count_param(Some("15")).unwrap(), 15);

        assert!(parse_count_param(Some("0")).is_err());
        assert!(parse_count_param(Some("16")).is_err());
        assert!(parse_count_param(Some("many")).is_err());
    }
}
