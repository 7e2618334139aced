//! Delete file tool handler

use super::handler::McpToolHandler;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct DeleteFileHandler {
    services: Arc<Services>,
}

impl DeleteFileHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for DeleteFileHandler {
    fn name(&self) -> &str {
        "obsidian_delete_file"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "obsidian_delete_file".to_string(),
            description: "Delete a file or directory from the vault. This is a DESTRUCTIVE \
                         operation that cannot be undone. Requires confirm=true to prevent \
                         accidental deletion."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filepath": {
                        "type": "string",
                        "description": "Path to the file or directory to delete (relative to \
                                       vault root)",
                        "format": "path"
                    },
                    "confirm": {
                        "type": "boolean",
                        "description": "Confirmation to delete the file (must be true)",
                        "default": false
                    }
                },
                "required": ["filepath", "confirm"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct DeleteArgs {
            filepath: String,
            #[serde(default)]
            confirm: bool,
        }

        let args: DeleteArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        if args.filepath.trim().is_empty() {
            return Err(McpError::InvalidParams(
                "filepath cannot be empty".to_string(),
            ));
        }

        // Require explicit confirmation before any network call
        if !args.confirm {
            return Err(McpError::InvalidRequest(
                "Deletion requires confirm=true parameter. \
                 This prevents accidental file deletion."
                    .to_string(),
            ));
        }

        let gateway = self.services.gateway()?;
        gateway.delete_file(&args.filepath).await?;

        Ok(ToolResult::text(format!(
            "Successfully deleted {}",
            args.filepath
        )))
    }
}
