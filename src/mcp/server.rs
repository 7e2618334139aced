//! Stdio JSON-RPC server loop.
//!
//! Reads one request per line from stdin and writes one response per line
//! to stdout. Logging goes to stderr so the protocol channel stays clean.

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::handlers::ProtocolHandlers;
use crate::mcp::protocol::{JsonRpcRequest, JsonRpcResponse, PARSE_ERROR};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter, Stdout};
use tracing::{debug, info};

pub struct McpServer {
    handlers: Arc<ProtocolHandlers>,
    stdout: BufWriter<Stdout>,
}

impl McpServer {
    pub fn new(services: Arc<Services>) -> Self {
        Self {
            handlers: Arc::new(ProtocolHandlers::new(services)),
            stdout: BufWriter::new(tokio::io::stdout()),
        }
    }

    /// Serve until stdin closes or the process is interrupted
    pub async fn run(&mut self) -> Result<(), McpError> {
        info!("Obsidian MCP server listening on stdio");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted, shutting down");
                    return Ok(());
                }
            };

            let Some(line) = line else {
                break; // EOF
            };
            if line.trim().is_empty() {
                continue;
            }

            let response = self.handle_line(&line).await;
            self.write_response(&response).await?;
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    async fn handle_line(&self, line: &str) -> JsonRpcResponse {
        debug!("<- {}", line);

        match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handlers.dispatch(request).await,
            Err(e) => JsonRpcResponse::failure(None, PARSE_ERROR, format!("Invalid request: {e}")),
        }
    }

    async fn write_response(&mut self, response: &JsonRpcResponse) -> Result<(), McpError> {
        // Notifications produce an empty response; nothing goes on the wire
        if response.id.is_none() && response.result.is_none() && response.error.is_none() {
            return Ok(());
        }

        let mut payload = serde_json::to_vec(response)?;
        debug!("-> {}", String::from_utf8_lossy(&payload));
        payload.push(b'\n');

        self.stdout.write_all(&payload).await?;
        self.stdout.flush().await?;
        Ok(())
    }
}
