//! List folder tool handler

use super::handler::McpToolHandler;
use super::helpers::format_file_list;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ListFilesInDirHandler {
    services: Arc<Services>,
}

impl ListFilesInDirHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for ListFilesInDirHandler {
    fn name(&self) -> &str {
        "obsidian_list_files_in_dir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "obsidian_list_files_in_dir".to_string(),
            description: "List all files and directories that exist in a specific Obsidian \
                         directory. Empty directories are not returned."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "dirpath": {
                        "type": "string",
                        "description": "Path to list files from (relative to your vault root). \
                                       Note that empty directories will not be returned."
                    }
                },
                "required": ["dirpath"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct ListDirArgs {
            dirpath: String,
        }

        let args: ListDirArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        if args.dirpath.trim().is_empty() {
            return Err(McpError::InvalidParams(
                "dirpath cannot be empty".to_string(),
            ));
        }

        let gateway = self.services.gateway()?;
        let files = gateway.list_files_in_dir(&args.dirpath).await?;

        Ok(ToolResult::text(format_file_list(&files)))
    }
}
