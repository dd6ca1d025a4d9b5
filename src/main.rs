//! WA Messenger - Main entry point
//!
//! Serves a single in-memory messenger session over the Model Context
//! Protocol on stdio.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wa_messenger::{Config, MessengerMcpServer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Configuration comes first so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let server = MessengerMcpServer::new(&config);
    info!(
        max_suggestions = config.max_suggestions,
        "WA Messenger initialized"
    );

    info!("Starting MCP server with stdio transport");
    wa_messenger::server::run_server(server).await?;

    info!("WA Messenger shutdown complete");
    Ok(())
}
