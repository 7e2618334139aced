//! Shared test fixtures: a recording vault gateway

use async_trait::async_trait;
use obsidian_mcp::core::client::VaultApi;
use obsidian_mcp::core::config::Config;
use obsidian_mcp::core::error::Result;
use obsidian_mcp::core::services::Services;
use obsidian_mcp::core::types::{PatchOperation, PatchTargetType};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum VaultCall {
    ListVault,
    ListDir(String),
    GetFile(String),
    Search {
        query: String,
        context_length: usize,
    },
    SearchJson(Value),
    Append {
        filepath: String,
        content: String,
    },
    Patch {
        filepath: String,
        operation: PatchOperation,
        target_type: PatchTargetType,
        target: String,
        content: String,
    },
    Delete(String),
    Rename {
        old_path: String,
        new_path: String,
    },
    Move {
        old_path: String,
        new_path: String,
    },
}

/// VaultApi implementation that records calls and returns canned results
#[derive(Default)]
pub struct RecordingVault {
    pub calls: Mutex<Vec<VaultCall>>,
}

impl RecordingVault {
    fn record(&self, call: VaultCall) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn recorded(&self) -> Vec<VaultCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VaultApi for RecordingVault {
    async fn list_files_in_vault(&self) -> Result<Vec<String>> {
        self.record(VaultCall::ListVault);
        Ok(vec!["note.md".to_string(), "folder/".to_string()])
    }

    async fn list_files_in_dir(&self, dirpath: &str) -> Result<Vec<String>> {
        self.record(VaultCall::ListDir(dirpath.to_string()));
        Ok(vec!["nested.md".to_string()])
    }

    async fn get_file_contents(&self, filepath: &str) -> Result<String> {
        self.record(VaultCall::GetFile(filepath.to_string()));
        Ok("# Test".to_string())
    }

    async fn search(&self, query: &str, context_length: usize) -> Result<Value> {
        self.record(VaultCall::Search {
            query: query.to_string(),
            context_length,
        });
        Ok(json!([]))
    }

    async fn search_json(&self, query: &Value) -> Result<Value> {
        self.record(VaultCall::SearchJson(query.clone()));
        Ok(json!([]))
    }

    async fn append_content(&self, filepath: &str, content: &str) -> Result<()> {
        self.record(VaultCall::Append {
            filepath: filepath.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }

    async fn patch_content(
        &self,
        filepath: &str,
        operation: PatchOperation,
        target_type: PatchTargetType,
        target: &str,
        content: &str,
    ) -> Result<()> {
        self.record(VaultCall::Patch {
            filepath: filepath.to_string(),
            operation,
            target_type,
            target: target.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }

    async fn delete_file(&self, filepath: &str) -> Result<()> {
        self.record(VaultCall::Delete(filepath.to_string()));
        Ok(())
    }

    async fn rename_file(&self, old_path: &str, new_path: &str) -> Result<()> {
        self.record(VaultCall::Rename {
            old_path: old_path.to_string(),
            new_path: new_path.to_string(),
        });
        Ok(())
    }

    async fn move_file(&self, old_path: &str, new_path: &str) -> Result<()> {
        self.record(VaultCall::Move {
            old_path: old_path.to_string(),
            new_path: new_path.to_string(),
        });
        Ok(())
    }
}

/// Services wired to a recording gateway
pub fn recording_services() -> (Arc<Services>, Arc<RecordingVault>) {
    let vault = Arc::new(RecordingVault::default());
    let config = Config {
        api_key: Some("test-key".to_string()),
        ..Config::default()
    };
    let services = Arc::new(Services::with_gateway(config, vault.clone()));
    (services, vault)
}
