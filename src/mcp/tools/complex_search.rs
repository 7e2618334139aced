//! JSON-logic search tool handler

use super::handler::McpToolHandler;
use super::helpers::pretty_json;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ComplexSearchHandler {
    services: Arc<Services>,
}

impl ComplexSearchHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for ComplexSearchHandler {
    fn name(&self) -> &str {
        "obsidian_complex_search"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "obsidian_complex_search".to_string(),
            description: "Complex search for documents using a JsonLogic query. Supports \
                         standard JsonLogic operators plus 'glob' and 'regexp' for pattern \
                         matching. Results must be non-falsy. Use this tool when you want to \
                         do a complex search, e.g. for all documents with certain tags."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "object",
                        "description": "JsonLogic query object. Example: \
                                       {\"glob\": [\"*.md\", {\"var\": \"path\"}]} matches all \
                                       markdown files"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct ComplexSearchArgs {
            query: Value,
        }

        let args: ComplexSearchArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        if !args.query.is_object() {
            return Err(McpError::InvalidParams(
                "query must be a JsonLogic object".to_string(),
            ));
        }

        let gateway = self.services.gateway()?;
        let results = gateway.search_json(&args.query).await?;

        Ok(ToolResult::text(pretty_json(&results)))
    }
}
