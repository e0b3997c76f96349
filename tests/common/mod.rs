//! Common test utilities for integration tests

use recur_mcp::RecurServerHandler;

/// Create a test handler
pub fn get_test_handler() -> RecurServerHandler {
    RecurServerHandler::new()
}
