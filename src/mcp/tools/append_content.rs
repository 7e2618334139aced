//! Append content tool handler

use super::handler::McpToolHandler;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct AppendContentHandler {
    services: Arc<Services>,
}

impl AppendContentHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for AppendContentHandler {
    fn name(&self) -> &str {
        "obsidian_append_content"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "obsidian_append_content".to_string(),
            description: "Append content to a new or existing file in the vault.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filepath": {
                        "type": "string",
                        "description": "Path to the file (relative to vault root)",
                        "format": "path"
                    },
                    "content": {
                        "type": "string",
                        "description": "Content to append to the file"
                    }
                },
                "required": ["filepath", "content"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct AppendArgs {
            filepath: String,
            content: String,
        }

        let args: AppendArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        if args.filepath.trim().is_empty() {
            return Err(McpError::InvalidParams(
                "filepath cannot be empty".to_string(),
            ));
        }

        let gateway = self.services.gateway()?;
        gateway.append_content(&args.filepath, &args.content).await?;

        Ok(ToolResult::text(format!(
            "Successfully appended content to {}",
            args.filepath
        )))
    }
}
