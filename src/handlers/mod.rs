//! MCP tool handlers for the recurrence server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod check_rule;
pub mod next_date;
pub mod resolve_due_date;
pub mod upcoming;
