//! MCP server for the messenger.
//!
//! This module exposes a single messenger session to MCP clients, which
//! manage contacts and receive ready-to-open wa.me links.

pub mod handlers;

pub use handlers::MessengerMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the messenger MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns when the
/// client disconnects.
pub async fn run_server(server: MessengerMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
