//! Tool handler trait

use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::Value;

/// One callable vault tool: a name, a declared argument schema, and an
/// execution path that validates arguments before touching the gateway.
#[async_trait]
pub trait McpToolHandler: Send + Sync {
    fn name(&self) -> &str;

    /// Descriptor advertised through tools/list
    fn schema(&self) -> ToolSchema;

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError>;
}
