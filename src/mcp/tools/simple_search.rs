//! Simple text search tool handler

use super::handler::McpToolHandler;
use super::helpers::pretty_json;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

const DEFAULT_CONTEXT_LENGTH: usize = 100;

pub struct SimpleSearchHandler {
    services: Arc<Services>,
}

impl SimpleSearchHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for SimpleSearchHandler {
    fn name(&self) -> &str {
        "obsidian_simple_search"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "obsidian_simple_search".to_string(),
            description: "Simple search for documents matching a specified text query across \
                         all files in the vault. Use this tool when you want to do a simple \
                         text search."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Text to a simple search for in the vault."
                    },
                    "context_length": {
                        "type": "integer",
                        "description": "How much context to return around the matching string \
                                       (default: 100)",
                        "default": DEFAULT_CONTEXT_LENGTH
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct SearchArgs {
            query: String,
            #[serde(default = "default_context_length")]
            context_length: usize,
        }
        fn default_context_length() -> usize {
            DEFAULT_CONTEXT_LENGTH
        }

        let args: SearchArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        if args.query.trim().is_empty() {
            return Err(McpError::InvalidParams("query cannot be empty".to_string()));
        }

        let gateway = self.services.gateway()?;
        let results = gateway.search(&args.query, args.context_length).await?;

        Ok(ToolResult::text(pretty_json(&results)))
    }
}
