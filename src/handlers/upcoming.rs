//! Upcoming-schedule handler for the recurrence MCP server

use mcp_attr::{Result as McpResult, bail_public};

use crate::RecurServerHandler;
use crate::formatting;
use crate::recurrence::{RecurrenceRule, local_date_today};
use crate::validation;

impl RecurServerHandler {
    /// **Preview**: The next several occurrence dates of a rule, computed by
    /// repeated evaluation. Each step re-anchors the engine just behind the
    /// previous result so every rule kind advances exactly one occurrence.
    pub async fn handle_upcoming(
        &self,
        date: String,
        repeat: String,
        now: Option<String>,
        count: Option<String>,
    ) -> McpResult<String> {
        if repeat.is_empty() {
            bail_public!(
                _,
                "No recurrence rule configured: an empty rule means the task does not repeat"
            );
        }

        let count = validation::parse_count_param(count.as_deref())?;
        let now = match now {
            Some(ref s) => validation::parse_date_param(s)?,
            None => local_date_today(),
        };
        let base = validation::parse_date_param(&date)?;
        let rule: RecurrenceRule = match repeat.parse() {
            Ok(rule) => rule,
            Err(e) => bail_public!(_, "{}", e),
        };

        tracing::debug!(%date, %repeat, count, "previewing upcoming occurrences");

        let mut dates = Vec::with_capacity(count);
        let mut current = rule.next_occurrence(now, base);
        dates.push(current);
        while dates.len() < count {
            let anchor = current.pred_opt().unwrap_or(current);
            current = rule.next_occurrence(anchor, current);
            dates.push(current);
        }

        Ok(formatting::format_schedule(&dates))
    }
}
