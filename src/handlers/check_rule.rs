//! Rule-check handler for the recurrence MCP server

use mcp_attr::{Result as McpResult, bail_public};

use crate::RecurServerHandler;
use crate::formatting;
use crate::recurrence::RecurrenceRule;

impl RecurServerHandler {
    /// **Validate**: Parse a rule without evaluating it. On success the
    /// response carries the canonical form (components sorted and
    /// deduplicated) and a plain-words description.
    pub async fn handle_check_rule(&self, repeat: String) -> McpResult<String> {
        if repeat.is_empty() {
            bail_public!(
                _,
                "No recurrence rule configured: an empty rule means the task does not repeat"
            );
        }

        match repeat.parse::<RecurrenceRule>() {
            Ok(rule) => Ok(format!(
                "Rule is valid. Canonical form: '{}' ({})",
                rule,
                formatting::describe_rule(&rule)
            )),
            Err(e) => bail_public!(_, "{}", e),
        }
    }
}
