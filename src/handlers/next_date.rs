//! Next-date handler for the recurrence MCP server

use mcp_attr::{Result as McpResult, bail_public};

use crate::RecurServerHandler;
use crate::recurrence;
use crate::validation;

impl RecurServerHandler {
    /// **Compute**: The next occurrence of a recurrence rule, stepping from a
    /// task's previous due date past the reference date.
    ///
    /// Failures are the engine's own validation errors, surfaced verbatim.
    pub async fn handle_next_date(
        &self,
        date: String,
        repeat: String,
        now: Option<String>,
    ) -> McpResult<String> {
        // An empty rule is a normal task state ("does not repeat"), rejected
        // here rather than delegated to the engine
        if repeat.is_empty() {
            bail_public!(
                _,
                "No recurrence rule configured: an empty rule means the task does not repeat"
            );
        }

        let now = validation::now_or_today(now);
        tracing::debug!(%now, %date, %repeat, "computing next occurrence");

        match recurrence::next_date(&now, &date, &repeat) {
            Ok(next) => Ok(next),
            Err(e) => bail_public!(_, "Cannot compute next date: {}", e),
        }
    }
}
