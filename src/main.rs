//! Recurrence MCP Server - Main Entry Point
//!
//! This is the main entry point for the recurrence MCP server application.
//! The actual implementation is in the `recur_mcp` library.

use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use recur_mcp::RecurServerHandler;
use tracing_subscriber::EnvFilter;

/// Recurrence MCP Server - next due date calculation for repeating tasks via
/// Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log filter directive (e.g. "info", "recur_mcp=debug")
    #[arg(long, default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the MCP protocol; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::info!("starting recurrence MCP server on stdio");
    serve_stdio(RecurServerHandler::new()).await?;
    Ok(())
}
