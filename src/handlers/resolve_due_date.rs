//! Due-date resolution handler for the recurrence MCP server

use mcp_attr::{Result as McpResult, bail_public};

use crate::RecurServerHandler;
use crate::recurrence::{self, format_compact, local_date_today};
use crate::validation;

impl RecurServerHandler {
    /// **Normalize**: Resolve the effective due date for a task being created
    /// or edited. An omitted date means today; a past date with a recurrence
    /// rule advances through the rule; a past date without one snaps to
    /// today; a current or future date passes through unchanged.
    pub async fn handle_resolve_due_date(
        &self,
        date: Option<String>,
        repeat: Option<String>,
        now: Option<String>,
    ) -> McpResult<String> {
        let now = match now {
            Some(ref s) => validation::parse_date_param(s)?,
            None => local_date_today(),
        };
        let now_str = format_compact(now);

        let date = date.unwrap_or_default();
        if date.is_empty() {
            return Ok(now_str);
        }

        let parsed = validation::parse_date_param(&date)?;
        if parsed >= now {
            return Ok(format_compact(parsed));
        }

        let repeat = repeat.unwrap_or_default();
        if repeat.is_empty() {
            return Ok(now_str);
        }

        tracing::debug!(%now_str, %date, %repeat, "advancing overdue date through rule");

        match recurrence::next_date(&now_str, &date, &repeat) {
            Ok(next) => Ok(next),
            Err(e) => bail_public!(_, "Cannot resolve due date: {}", e),
        }
    }
}
