//! End-to-end tool dispatch tests through the protocol layer
//!
//! These exercise tools/call against a recording gateway: validation
//! failures must never reach the gateway, and valid calls must reach it
//! exactly once with the right operation.

#[cfg(test)]
mod tests {
    use crate::common::{recording_services, VaultCall};
    use obsidian_mcp::mcp::handlers::ProtocolHandlers;
    use obsidian_mcp::mcp::protocol::*;
    use serde_json::{json, Value};

    fn call_request(name: &str, arguments: Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: "tools/call".to_string(),
            params: Some(json!({
                "name": name,
                "arguments": arguments
            })),
        }
    }

    #[tokio::test]
    async fn test_rename_same_directory_dispatches_once() {
        let (services, vault) = recording_services();
        let handlers = ProtocolHandlers::new(services);

        let response = handlers
            .dispatch(call_request(
                "obsidian_rename_file",
                json!({"old_path": "folder/old.md", "new_path": "folder/new.md"}),
            ))
            .await;

        assert!(response.error.is_none());
        assert_eq!(
            vault.recorded(),
            vec![VaultCall::Rename {
                old_path: "folder/old.md".to_string(),
                new_path: "folder/new.md".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_rename_cross_directory_fails_without_dispatch() {
        let (services, vault) = recording_services();
        let handlers = ProtocolHandlers::new(services);

        let response = handlers
            .dispatch(call_request(
                "obsidian_rename_file",
                json!({"old_path": "folder1/a.md", "new_path": "folder2/a.md"}),
            ))
            .await;

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_REQUEST);
        assert!(error.message.contains("folder1/a.md"));
        assert!(error.message.contains("folder2/a.md"));
        assert!(vault.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_move_cross_directory_dispatches_full_path() {
        let (services, vault) = recording_services();
        let handlers = ProtocolHandlers::new(services);

        let response = handlers
            .dispatch(call_request(
                "obsidian_move_file",
                json!({"old_path": "folder1/test.md", "new_path": "folder2/test.md"}),
            ))
            .await;

        assert!(response.error.is_none());
        assert_eq!(
            vault.recorded(),
            vec![VaultCall::Move {
                old_path: "folder1/test.md".to_string(),
                new_path: "folder2/test.md".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_delete_without_confirm_fails_without_dispatch() {
        let (services, vault) = recording_services();
        let handlers = ProtocolHandlers::new(services);

        let response = handlers
            .dispatch(call_request(
                "obsidian_delete_file",
                json!({"filepath": "test.md"}),
            ))
            .await;

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_REQUEST);
        assert!(error.message.contains("confirm=true"));
        assert!(vault.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_delete_with_confirm_dispatches_once() {
        let (services, vault) = recording_services();
        let handlers = ProtocolHandlers::new(services);

        let response = handlers
            .dispatch(call_request(
                "obsidian_delete_file",
                json!({"filepath": "test.md", "confirm": true}),
            ))
            .await;

        assert!(response.error.is_none());
        assert_eq!(
            vault.recorded(),
            vec![VaultCall::Delete("test.md".to_string())]
        );
    }

    #[tokio::test]
    async fn test_patch_invalid_enum_fails_without_dispatch() {
        let (services, vault) = recording_services();
        let handlers = ProtocolHandlers::new(services);

        let response = handlers
            .dispatch(call_request(
                "obsidian_patch_content",
                json!({
                    "filepath": "test.md",
                    "operation": "overwrite",
                    "target_type": "heading",
                    "target": "Notes",
                    "content": "x"
                }),
            ))
            .await;

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(vault.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_append_reports_success_text() {
        let (services, vault) = recording_services();
        let handlers = ProtocolHandlers::new(services);

        let response = handlers
            .dispatch(call_request(
                "obsidian_append_content",
                json!({"filepath": "notes/log.md", "content": "entry"}),
            ))
            .await;

        assert_eq!(vault.recorded().len(), 1);
        let result = response.result.unwrap();
        assert_eq!(
            result["content"][0]["text"],
            "Successfully appended content to notes/log.md"
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_surfaces_configuration_error() {
        use obsidian_mcp::core::config::Config;
        use obsidian_mcp::core::services::Services;
        use std::sync::Arc;

        // No gateway override and no API key: the tool layer must surface a
        // configuration error without attempting a network call.
        let services = Arc::new(Services::new(Config::default()));
        let handlers = ProtocolHandlers::new(services);

        let response = handlers
            .dispatch(call_request(
                "obsidian_list_files_in_vault",
                json!({}),
            ))
            .await;

        let error = response.error.unwrap();
        assert_eq!(error.code, CONFIGURATION_ERROR);
        assert!(error.message.contains("OBSIDIAN_API_KEY"));
    }

    #[tokio::test]
    async fn test_complex_search_passes_query_through() {
        let (services, vault) = recording_services();
        let handlers = ProtocolHandlers::new(services);

        let query = json!({"glob": ["*.md", {"var": "path"}]});
        let response = handlers
            .dispatch(call_request(
                "obsidian_complex_search",
                json!({ "query": query }),
            ))
            .await;

        assert!(response.error.is_none());
        assert_eq!(vault.recorded(), vec![VaultCall::SearchJson(query)]);
    }
}
