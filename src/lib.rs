//! Recurrence MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for task
//! recurrence scheduling: given a task's previous due date and a compact
//! recurrence rule, it computes when the task is due next.
//!
//! # Architecture
//!
//! The library follows a 2-layer architecture:
//! - **MCP Layer**: `RecurServerHandler` - Handles MCP protocol communication
//! - **Engine Layer**: `recurrence` module - Rule parsing and next-date
//!   evaluation, pure and stateless
//!
//! # Example
//!
//! ```
//! use recur_mcp::recurrence;
//!
//! let next = recurrence::next_date("20240126", "20240120", "d 7").unwrap();
//! assert_eq!(next, "20240127");
//! ```

mod formatting;
mod handlers;
pub mod recurrence;
pub mod validation;

use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};

// Re-export commonly used types
pub use recurrence::{RecurrenceError, RecurrenceRule};

/// MCP server handler for recurrence date calculation
///
/// Provides an MCP interface to the recurrence engine. The engine is pure
/// date math, so the handler carries no state and is safe to share across
/// any number of concurrent callers.
#[derive(Debug, Default)]
pub struct RecurServerHandler;

impl RecurServerHandler {
    /// Create a new recurrence server handler
    pub fn new() -> Self {
        Self
    }
}

/// Task recurrence calculator. Computes when a repeating task is next due
/// from a compact rule string.
///
/// Rule grammar:
/// - `d <n>`: every n days (1-400), e.g. "d 14"
/// - `y`: every year on the same date
/// - `w <list>`: weekly on the listed weekdays, 1=Monday..7=Sunday, e.g. "w 1,5"
/// - `m <days> [<months>]`: monthly on the listed days (1-31 from the month
///   start, -1/-2 from the month end), optionally limited to the listed
///   months, e.g. "m -1" or "m 15,31 3,6"
///
/// All dates use the compact YYYYMMDD form, e.g. "20250315".
#[mcp_server]
impl McpServer for RecurServerHandler {
    /// **Next date**: Compute the next occurrence of a repeating task.
    /// **Use**: After completing a recurring task, pass its due date and rule to get the new due date.
    /// **Returns**: A single YYYYMMDD date. It is never before `now`, and only the `d` rule may land exactly on `now`.
    #[tool]
    async fn next_date(
        &self,
        /// Task due date to step from, YYYYMMDD
        date: String,
        /// Recurrence rule (e.g. "d 7", "y", "w 1,5", "m -1")
        repeat: String,
        /// Reference date, YYYYMMDD; defaults to today (optional)
        now: Option<String>,
    ) -> McpResult<String> {
        self.handle_next_date(date, repeat, now).await
    }

    /// **Upcoming**: List the next several occurrences of a repeating task.
    /// **Use**: Preview a rule's schedule before saving it to a task.
    #[tool]
    async fn upcoming(
        &self,
        /// Task due date to step from, YYYYMMDD
        date: String,
        /// Recurrence rule (e.g. "d 7", "y", "w 1,5", "m -1")
        repeat: String,
        /// Reference date, YYYYMMDD; defaults to today (optional)
        now: Option<String>,
        /// Number of dates to return, 1-15; defaults to 5 (optional)
        count: Option<String>,
    ) -> McpResult<String> {
        self.handle_upcoming(date, repeat, now, count).await
    }

    /// **Check rule**: Validate a recurrence rule without evaluating it.
    /// **Use**: Before storing a rule on a task. Returns the canonical form and a description.
    #[tool]
    async fn check_rule(
        &self,
        /// Recurrence rule to validate
        repeat: String,
    ) -> McpResult<String> {
        self.handle_check_rule(repeat).await
    }

    /// **Resolve due date**: Normalize a task's due date at create/edit time.
    /// **Use**: Omitted date means today; an overdue date advances through the rule (or snaps to today without one); a future date is kept.
    #[tool]
    async fn resolve_due_date(
        &self,
        /// Requested due date, YYYYMMDD; defaults to today (optional)
        date: Option<String>,
        /// Recurrence rule, empty for non-repeating tasks (optional)
        repeat: Option<String>,
        /// Reference date, YYYYMMDD; defaults to today (optional)
        now: Option<String>,
    ) -> McpResult<String> {
        self.handle_resolve_due_date(date, repeat, now).await
    }
}
