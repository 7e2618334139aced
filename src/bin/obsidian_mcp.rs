//! Obsidian MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that exposes an Obsidian vault (via the Local
//! REST API community plugin) as tools for Claude Code and other MCP clients.

use obsidian_mcp::core::config::Config;
use obsidian_mcp::core::services::Services;
use obsidian_mcp::mcp::McpServer;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // Critical: stderr not stdout
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false) // No color codes
        .compact() // Concise format
        .init();
}

#[tokio::main]
async fn main() {
    // Pick up OBSIDIAN_* variables from a local .env file when present
    dotenv::dotenv().ok();

    init_logging();

    // Load configuration (env vars > TOML > defaults)
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });

    config.log_config();

    if config.api_key.is_none() {
        tracing::warn!(
            "OBSIDIAN_API_KEY is not set; tool calls will fail until it is configured"
        );
    }

    // Create services
    let services = Arc::new(Services::new(config));

    // Create and run MCP server
    let mut server = McpServer::new(services);

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
