//! Get file contents tool handler

use super::handler::McpToolHandler;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetFileContentsHandler {
    services: Arc<Services>,
}

impl GetFileContentsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for GetFileContentsHandler {
    fn name(&self) -> &str {
        "obsidian_get_file_contents"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "obsidian_get_file_contents".to_string(),
            description: "Return the content of a single file in your vault.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filepath": {
                        "type": "string",
                        "description": "Path to the relevant file (relative to your vault root).",
                        "format": "path"
                    }
                },
                "required": ["filepath"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct GetFileArgs {
            filepath: String,
        }

        let args: GetFileArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        if args.filepath.trim().is_empty() {
            return Err(McpError::InvalidParams(
                "filepath cannot be empty".to_string(),
            ));
        }

        let gateway = self.services.gateway()?;
        let content = gateway.get_file_contents(&args.filepath).await?;

        Ok(ToolResult::text(content))
    }
}
