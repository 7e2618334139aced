//! MCP protocol dispatch tests

#[cfg(test)]
mod tests {
    use crate::common::recording_services;
    use obsidian_mcp::mcp::handlers::ProtocolHandlers;
    use obsidian_mcp::mcp::protocol::*;
    use serde_json::{json, Value};

    fn create_test_handlers() -> ProtocolHandlers {
        let (services, _vault) = recording_services();
        ProtocolHandlers::new(services)
    }

    fn request(method: &str, id: Option<Value>, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id,
            method: method.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn test_initialize() {
        let handlers = create_test_handlers();

        let response = handlers
            .dispatch(request(
                "initialize",
                Some(json!(1)),
                Some(json!({
                    "protocolVersion": "2024-11-05",
                    "capabilities": {"tools": {}},
                    "clientInfo": {"name": "test", "version": "1.0"}
                })),
            ))
            .await;

        assert_eq!(response.jsonrpc, "2.0");
        assert!(response.error.is_none());

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "obsidian-mcp");
    }

    #[tokio::test]
    async fn test_tools_list_exposes_all_vault_tools() {
        let handlers = create_test_handlers();

        let response = handlers
            .dispatch(request("tools/list", Some(json!(2)), None))
            .await;
        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();

        assert_eq!(tools.len(), 10);

        let names: Vec<&str> = tools
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        for expected in [
            "obsidian_list_files_in_vault",
            "obsidian_list_files_in_dir",
            "obsidian_get_file_contents",
            "obsidian_simple_search",
            "obsidian_complex_search",
            "obsidian_append_content",
            "obsidian_patch_content",
            "obsidian_delete_file",
            "obsidian_rename_file",
            "obsidian_move_file",
        ] {
            assert!(names.contains(&expected), "missing tool: {expected}");
        }

        // Every tool declares an input schema
        for tool in tools {
            assert!(tool["inputSchema"].is_object());
            assert!(!tool["description"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let handlers = create_test_handlers();

        let response = handlers
            .dispatch(request(
                "tools/call",
                Some(json!(3)),
                Some(json!({
                    "name": "nonexistent_tool",
                    "arguments": {}
                })),
            ))
            .await;
        let error = response.error.unwrap();

        assert_eq!(error.code, INVALID_REQUEST);
        assert!(error.message.contains("nonexistent_tool"));
    }

    #[tokio::test]
    async fn test_tools_call_missing_params() {
        let handlers = create_test_handlers();

        let response = handlers
            .dispatch(request("tools/call", Some(json!(4)), None))
            .await;
        let error = response.error.unwrap();

        assert_eq!(error.code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let handlers = create_test_handlers();

        let response = handlers
            .dispatch(request("resources/list", Some(json!(5)), None))
            .await;
        let error = response.error.unwrap();

        assert_eq!(error.code, METHOD_NOT_FOUND);
        assert!(error.message.contains("resources/list"));
    }

    #[tokio::test]
    async fn test_ping() {
        let handlers = create_test_handlers();

        let response = handlers.dispatch(request("ping", Some(json!(6)), None)).await;
        assert!(response.error.is_none());
        assert_eq!(response.result.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn test_initialized_notification_has_no_payload() {
        let handlers = create_test_handlers();

        let response = handlers.dispatch(request("initialized", None, None)).await;
        assert!(response.id.is_none());
        assert!(response.result.is_none());
        assert!(response.error.is_none());
    }
}
