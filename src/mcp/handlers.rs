//! JSON-RPC method dispatch for the MCP protocol

use crate::core::services::Services;
use crate::mcp::protocol::*;
use crate::mcp::tools::{
    AppendContentHandler, ComplexSearchHandler, DeleteFileHandler, GetFileContentsHandler,
    ListFilesInDirHandler, ListFilesInVaultHandler, MoveFileHandler, PatchContentHandler,
    RenameFileHandler, SimpleSearchHandler, ToolRegistry,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub struct ProtocolHandlers {
    initialized: AtomicBool,
    tools: ToolRegistry,
}

impl ProtocolHandlers {
    pub fn new(services: Arc<Services>) -> Self {
        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(ListFilesInVaultHandler::new(Arc::clone(&services))));
        tools.register(Arc::new(ListFilesInDirHandler::new(Arc::clone(&services))));
        tools.register(Arc::new(GetFileContentsHandler::new(Arc::clone(&services))));
        tools.register(Arc::new(SimpleSearchHandler::new(Arc::clone(&services))));
        tools.register(Arc::new(ComplexSearchHandler::new(Arc::clone(&services))));
        tools.register(Arc::new(AppendContentHandler::new(Arc::clone(&services))));
        tools.register(Arc::new(PatchContentHandler::new(Arc::clone(&services))));
        tools.register(Arc::new(DeleteFileHandler::new(Arc::clone(&services))));
        tools.register(Arc::new(RenameFileHandler::new(Arc::clone(&services))));
        tools.register(Arc::new(MoveFileHandler::new(services)));

        Self {
            initialized: AtomicBool::new(false),
            tools,
        }
    }

    /// Route one parsed request to its method handler
    pub async fn dispatch(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let JsonRpcRequest {
            id, method, params, ..
        } = request;

        match method.as_str() {
            "initialize" => self.initialize(id),
            "initialized" => self.mark_initialized(),
            "tools/list" => self.list_tools(id),
            "tools/call" => self.call_tool(id, params).await,
            "ping" => JsonRpcResponse::success(id, json!({})),
            other => {
                JsonRpcResponse::failure(id, METHOD_NOT_FOUND, format!("Unknown method: {other}"))
            }
        }
    }

    fn initialize(&self, id: Option<Value>) -> JsonRpcResponse {
        info!("Client connected");

        let result = InitializeResult {
            protocol_version: "2024-11-05".to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "obsidian-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::failure(id, INTERNAL_ERROR, e.to_string()),
        }
    }

    // "initialized" is a notification; the empty response is never written out
    fn mark_initialized(&self) -> JsonRpcResponse {
        self.initialized.store(true, Ordering::SeqCst);
        info!("Client initialization complete");
        JsonRpcResponse::empty()
    }

    fn list_tools(&self, id: Option<Value>) -> JsonRpcResponse {
        JsonRpcResponse::success(id, json!({ "tools": self.tools.list() }))
    }

    async fn call_tool(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params: ToolCallParams = match params.map(serde_json::from_value).transpose() {
            Ok(Some(p)) => p,
            Ok(None) => return JsonRpcResponse::failure(id, INVALID_PARAMS, "Missing params"),
            Err(e) => {
                return JsonRpcResponse::failure(id, INVALID_PARAMS, format!("Invalid params: {e}"))
            }
        };

        let Some(handler) = self.tools.get(&params.name) else {
            return JsonRpcResponse::failure(
                id,
                INVALID_REQUEST,
                format!("Tool not found: {}", params.name),
            );
        };

        match handler.execute(params.arguments).await {
            Ok(result) => match serde_json::to_value(result) {
                Ok(value) => JsonRpcResponse::success(id, value),
                Err(e) => JsonRpcResponse::failure(id, INTERNAL_ERROR, e.to_string()),
            },
            Err(e) => {
                let (code, message) = e.rpc_error();
                JsonRpcResponse::failure(id, code, message)
            }
        }
    }
}
