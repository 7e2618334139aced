//! Shared formatting helpers for tool handlers

use serde_json::Value;

/// Render a JSON value as indented text for the caller
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Render a directory listing, one entry per line
pub fn format_file_list(files: &[String]) -> String {
    if files.is_empty() {
        return "No files found.".to_string();
    }
    files.join("\n")
}
