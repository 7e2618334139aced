//! List vault root tool handler

use super::handler::McpToolHandler;
use super::helpers::format_file_list;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ListFilesInVaultHandler {
    services: Arc<Services>,
}

impl ListFilesInVaultHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for ListFilesInVaultHandler {
    fn name(&self) -> &str {
        "obsidian_list_files_in_vault"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "obsidian_list_files_in_vault".to_string(),
            description: "List all files and directories in the root directory of your \
                         Obsidian vault. Directories end with a trailing slash."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        let gateway = self.services.gateway()?;
        let files = gateway.list_files_in_vault().await?;

        Ok(ToolResult::text(format_file_list(&files)))
    }
}
