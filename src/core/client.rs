//! HTTPS gateway to the Obsidian Local REST API plugin.
//!
//! Each operation issues exactly one request. The plugin serves a
//! self-signed certificate, so verification is disabled. Timeouts are fixed
//! and short: calls fail fast instead of hanging.

use crate::core::config::Config;
use crate::core::error::{ObsidianError, Result};
use crate::core::path::{encode_vault_path, leaf_name};
use crate::core::types::{PatchOperation, PatchTargetType};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const JSONLOGIC_CONTENT_TYPE: &str = "application/vnd.olrapi.jsonlogic+json";

/// Gateway operations against the vault.
///
/// Implemented by [`ObsidianClient`]; tool tests substitute a recording mock.
#[async_trait]
pub trait VaultApi: Send + Sync {
    /// List entries at the vault root
    async fn list_files_in_vault(&self) -> Result<Vec<String>>;

    /// List entries in a folder
    async fn list_files_in_dir(&self, dirpath: &str) -> Result<Vec<String>>;

    /// Fetch the raw text content of a note
    async fn get_file_contents(&self, filepath: &str) -> Result<String>;

    /// Full-text search; returns match records (path, score, context)
    async fn search(&self, query: &str, context_length: usize) -> Result<Value>;

    /// JSON-logic search; the query object is passed through opaquely
    async fn search_json(&self, query: &Value) -> Result<Value>;

    /// Append content to a note, creating it if absent
    async fn append_content(&self, filepath: &str, content: &str) -> Result<()>;

    /// Anchor-relative edit of a note
    async fn patch_content(
        &self,
        filepath: &str,
        operation: PatchOperation,
        target_type: PatchTargetType,
        target: &str,
        content: &str,
    ) -> Result<()>;

    /// Delete a note
    async fn delete_file(&self, filepath: &str) -> Result<()>;

    /// Rename the leaf name of a note, keeping it in its current folder.
    /// The endpoint only changes the final path segment; callers that need
    /// to change folders must use [`VaultApi::move_file`].
    async fn rename_file(&self, old_path: &str, new_path: &str) -> Result<()>;

    /// Relocate a note to a new full path, optionally renaming it
    async fn move_file(&self, old_path: &str, new_path: &str) -> Result<()>;
}

/// Error body the REST plugin returns on failures
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(rename = "errorCode")]
    error_code: i64,
    message: String,
}

/// Directory listing body: `{"files": [...]}`
#[derive(Debug, Deserialize)]
struct FileListBody {
    files: Vec<String>,
}

/// HTTP client for the Local REST API plugin.
///
/// Construction is cheap; a fresh client is built per tool invocation and no
/// connection state is carried between calls.
#[derive(Debug)]
pub struct ObsidianClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl ObsidianClient {
    /// Build a client from configuration. Fails with a configuration error
    /// when no API key is available; no network call is made here.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            ObsidianError::ConfigError(
                "OBSIDIAN_API_KEY environment variable required".to_string(),
            )
        })?;

        Self::new(
            api_key,
            config.base_url(),
            config.connect_timeout_sec,
            config.read_timeout_sec,
        )
    }

    /// Build a client with explicit parameters
    pub fn new(
        api_key: String,
        base_url: String,
        connect_timeout_sec: u64,
        read_timeout_sec: u64,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            // The plugin serves a self-signed local certificate
            .danger_accept_invalid_certs(true)
            .connect_timeout(Duration::from_secs(connect_timeout_sec))
            .timeout(Duration::from_secs(read_timeout_sec))
            .build()
            .map_err(|e| ObsidianError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            api_key,
            http,
        })
    }

    /// URL for a vault path, percent-encoded per segment
    fn vault_url(&self, path: &str) -> String {
        format!("{}/vault/{}", self.base_url, encode_vault_path(path))
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        debug!("{} {}", method, url);
        self.http
            .request(method, url)
            .bearer_auth(&self.api_key)
    }

    /// Check a response status, turning non-2xx into a typed error
    async fn check(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(error_from_status(status, &body))
    }
}

/// Map a non-2xx status and body to the error taxonomy.
///
/// The body is parsed as `{errorCode, message}` when it is JSON; otherwise
/// the raw HTTP status line is used as the message.
fn error_from_status(status: StatusCode, body: &str) -> ObsidianError {
    let (error_code, message) = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => (parsed.error_code, parsed.message),
        Err(_) => (i64::from(status.as_u16()), status.to_string()),
    };

    match status {
        StatusCode::NOT_FOUND => ObsidianError::NotFound {
            error_code,
            message,
        },
        StatusCode::CONFLICT => ObsidianError::Conflict {
            error_code,
            message,
        },
        _ => ObsidianError::Status {
            status: status.as_u16(),
            error_code,
            message,
        },
    }
}

#[async_trait]
impl VaultApi for ObsidianClient {
    async fn list_files_in_vault(&self) -> Result<Vec<String>> {
        let url = format!("{}/vault/", self.base_url);
        let response = self.request(Method::GET, url).send().await?;
        let body: FileListBody = self.check(response).await?.json().await?;
        Ok(body.files)
    }

    async fn list_files_in_dir(&self, dirpath: &str) -> Result<Vec<String>> {
        let url = format!("{}/", self.vault_url(dirpath));
        let response = self.request(Method::GET, url).send().await?;
        let body: FileListBody = self.check(response).await?.json().await?;
        Ok(body.files)
    }

    async fn get_file_contents(&self, filepath: &str) -> Result<String> {
        let response = self
            .request(Method::GET, self.vault_url(filepath))
            .send()
            .await?;
        let text = self.check(response).await?.text().await?;
        Ok(text)
    }

    async fn search(&self, query: &str, context_length: usize) -> Result<Value> {
        let url = format!("{}/search/simple/", self.base_url);
        let context_length = context_length.to_string();
        let response = self
            .request(Method::POST, url)
            .query(&[("query", query), ("contextLength", context_length.as_str())])
            .send()
            .await?;
        let body: Value = self.check(response).await?.json().await?;
        Ok(body)
    }

    async fn search_json(&self, query: &Value) -> Result<Value> {
        let url = format!("{}/search/", self.base_url);
        let response = self
            .request(Method::POST, url)
            .header("Content-Type", JSONLOGIC_CONTENT_TYPE)
            .body(serde_json::to_string(query)?)
            .send()
            .await?;
        let body: Value = self.check(response).await?.json().await?;
        Ok(body)
    }

    async fn append_content(&self, filepath: &str, content: &str) -> Result<()> {
        let response = self
            .request(Method::POST, self.vault_url(filepath))
            .header("Content-Type", "text/plain")
            .body(content.to_string())
            .send()
            .await?;
        self.check(response).await?;
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
        let response = self
            .request(Method::PATCH, self.vault_url(filepath))
            .header("Content-Type", "text/plain")
            .header("Operation", operation.as_str())
            .header("Target-Type", target_type.as_str())
            // Encoded so heading text with non-ASCII stays a valid header
            .header("Target", urlencoding::encode(target).into_owned())
            .body(content.to_string())
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    async fn delete_file(&self, filepath: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, self.vault_url(filepath))
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    async fn rename_file(&self, old_path: &str, new_path: &str) -> Result<()> {
        // The endpoint renames the leaf name only; the body must be the new
        // filename, not a full path.
        let response = self
            .request(Method::PATCH, self.vault_url(old_path))
            .header("Content-Type", "text/plain")
            .header("Operation", "rename")
            .header("Target-Type", "file")
            .header("Target", "name")
            .body(leaf_name(new_path).to_string())
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    async fn move_file(&self, old_path: &str, new_path: &str) -> Result<()> {
        let response = self
            .request(Method::PATCH, self.vault_url(old_path))
            .header("Content-Type", "text/plain")
            .header("Operation", "move")
            .header("Target-Type", "file")
            .header("Target", "path")
            .body(new_path.to_string())
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }
}
