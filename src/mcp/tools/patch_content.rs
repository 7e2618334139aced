//! Patch content tool handler

use super::handler::McpToolHandler;
use crate::core::services::Services;
use crate::core::types::{PatchOperation, PatchTargetType};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct PatchContentHandler {
    services: Arc<Services>,
}

impl PatchContentHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for PatchContentHandler {
    fn name(&self) -> &str {
        "obsidian_patch_content"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "obsidian_patch_content".to_string(),
            description: "Insert content into an existing note relative to a heading, block \
                         reference, or frontmatter field."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filepath": {
                        "type": "string",
                        "description": "Path to the file (relative to vault root)",
                        "format": "path"
                    },
                    "operation": {
                        "type": "string",
                        "description": "Operation to perform (append, prepend, or replace)",
                        "enum": PatchOperation::ALLOWED
                    },
                    "target_type": {
                        "type": "string",
                        "description": "Type of target to patch",
                        "enum": PatchTargetType::ALLOWED
                    },
                    "target": {
                        "type": "string",
                        "description": "Target identifier (heading path, block reference, or \
                                       frontmatter field)"
                    },
                    "content": {
                        "type": "string",
                        "description": "Content to insert"
                    }
                },
                "required": ["filepath", "operation", "target_type", "target", "content"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct PatchArgs {
            filepath: String,
            operation: String,
            target_type: String,
            target: String,
            content: String,
        }

        let args: PatchArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        if args.filepath.trim().is_empty() {
            return Err(McpError::InvalidParams(
                "filepath cannot be empty".to_string(),
            ));
        }

        // Enumerated values are checked before any network call
        let operation: PatchOperation =
            args.operation.parse().map_err(McpError::InvalidParams)?;
        let target_type: PatchTargetType =
            args.target_type.parse().map_err(McpError::InvalidParams)?;

        let gateway = self.services.gateway()?;
        gateway
            .patch_content(
                &args.filepath,
                operation,
                target_type,
                &args.target,
                &args.content,
            )
            .await?;

        Ok(ToolResult::text(format!(
            "Successfully patched content in {}",
            args.filepath
        )))
    }
}
