//! Move file tool handler
//!
//! Relocates a file to any new path in the vault: same-directory renames,
//! cross-directory moves, and combined move+rename in one call.

use super::handler::McpToolHandler;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct MoveFileHandler {
    services: Arc<Services>,
}

impl MoveFileHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for MoveFileHandler {
    fn name(&self) -> &str {
        "obsidian_move_file"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "obsidian_move_file".to_string(),
            description: "Move a file to a different directory in the vault, optionally \
                         renaming it in the same call. Also valid for same-directory renames."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "old_path": {
                        "type": "string",
                        "description": "Current path of the file (relative to vault root)",
                        "format": "path"
                    },
                    "new_path": {
                        "type": "string",
                        "description": "New full path for the file, including the target \
                                       directory",
                        "format": "path"
                    }
                },
                "required": ["old_path", "new_path"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct MoveArgs {
            old_path: String,
            new_path: String,
        }

        let args: MoveArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        if args.old_path.trim().is_empty() || args.new_path.trim().is_empty() {
            return Err(McpError::InvalidParams(
                "old_path and new_path cannot be empty".to_string(),
            ));
        }

        let gateway = self.services.gateway()?;
        gateway.move_file(&args.old_path, &args.new_path).await?;

        Ok(ToolResult::text(format!(
            "Successfully moved {} to {}",
            args.old_path, args.new_path
        )))
    }
}
