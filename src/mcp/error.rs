//! MCP-specific error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Tool error (code {0}): {1}")]
    ToolError(i32, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// JSON-RPC error code and message carried by this error
    pub fn rpc_error(&self) -> (i32, String) {
        use crate::mcp::protocol;
        match self {
            McpError::ParseError(msg) => (protocol::PARSE_ERROR, msg.clone()),
            McpError::InvalidRequest(msg) => (protocol::INVALID_REQUEST, msg.clone()),
            McpError::InvalidParams(msg) => (protocol::INVALID_PARAMS, msg.clone()),
            McpError::ToolError(code, msg) => (*code, msg.clone()),
            McpError::InternalError(_) | McpError::Io(_) | McpError::Json(_) => {
                (protocol::INTERNAL_ERROR, self.to_string())
            }
        }
    }
}

impl From<crate::core::error::ObsidianError> for McpError {
    fn from(err: crate::core::error::ObsidianError) -> Self {
        use crate::core::error::ObsidianError;
        use crate::mcp::protocol;
        match err {
            ObsidianError::ConfigError(msg) => {
                McpError::ToolError(protocol::CONFIGURATION_ERROR, msg)
            }
            ObsidianError::Connection(e) => McpError::ToolError(
                protocol::CONNECTION_FAILED,
                format!("Could not reach the Obsidian REST API: {e}"),
            ),
            ObsidianError::BadResponse(e) => {
                McpError::InternalError(format!("Invalid response body: {e}"))
            }
            err @ ObsidianError::NotFound { .. } => {
                McpError::ToolError(protocol::FILE_NOT_FOUND, err.to_string())
            }
            err @ ObsidianError::Conflict { .. } => {
                McpError::ToolError(protocol::DESTINATION_EXISTS, err.to_string())
            }
            err @ ObsidianError::Status { .. } => {
                McpError::ToolError(protocol::UPSTREAM_ERROR, err.to_string())
            }
            ObsidianError::SerdeError(e) => {
                McpError::InternalError(format!("Serialization error: {e}"))
            }
            ObsidianError::TomlError(e) => {
                McpError::InternalError(format!("Configuration parse error: {e}"))
            }
            ObsidianError::IoError(e) => McpError::InternalError(format!("I/O error: {e}")),
        }
    }
}
