//! Rename file tool handler
//!
//! Restricted to same-directory renames: the underlying endpoint only
//! changes the leaf name, so a cross-directory pair would silently produce
//! an inconsistent path. Cross-directory relocation belongs to
//! `obsidian_move_file`.

use super::handler::McpToolHandler;
use crate::core::path::folder_of;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct RenameFileHandler {
    services: Arc<Services>,
}

impl RenameFileHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for RenameFileHandler {
    fn name(&self) -> &str {
        "obsidian_rename_file"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "obsidian_rename_file".to_string(),
            description: "Rename a file within the same directory of the vault. Note: \
                         Obsidian may update backlinks to the renamed file, but this is \
                         upstream behavior and not guaranteed by this tool. To move a file \
                         to a different directory, use obsidian_move_file instead."
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
                        "description": "New path for the file. Must be in the same directory \
                                       as old_path.",
                        "format": "path"
                    }
                },
                "required": ["old_path", "new_path"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct RenameArgs {
            old_path: String,
            new_path: String,
        }

        let args: RenameArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        if args.old_path.trim().is_empty() || args.new_path.trim().is_empty() {
            return Err(McpError::InvalidParams(
                "old_path and new_path cannot be empty".to_string(),
            ));
        }

        // Same-directory guard, enforced before any network call
        if folder_of(&args.old_path) != folder_of(&args.new_path) {
            return Err(McpError::InvalidRequest(format!(
                "Cannot rename '{}' to '{}': the paths are in different directories. \
                 obsidian_rename_file is restricted to same-directory renames; \
                 use obsidian_move_file to move files between directories.",
                args.old_path, args.new_path
            )));
        }

        let gateway = self.services.gateway()?;
        gateway.rename_file(&args.old_path, &args.new_path).await?;

        Ok(ToolResult::text(format!(
            "Successfully renamed {} to {}",
            args.old_path, args.new_path
        )))
    }
}
