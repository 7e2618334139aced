//! MCP tool implementations
//!
//! This module contains all MCP tool handlers that expose the vault
//! operations to agents.

pub mod append_content;
pub mod complex_search;
pub mod delete_file;
pub mod get_file_contents;
pub mod handler;
pub mod helpers;
pub mod list_files_in_dir;
pub mod list_files_in_vault;
pub mod move_file;
pub mod patch_content;
pub mod registry;
pub mod rename_file;
pub mod simple_search;

pub use append_content::AppendContentHandler;
pub use complex_search::ComplexSearchHandler;
pub use delete_file::DeleteFileHandler;
pub use get_file_contents::GetFileContentsHandler;
pub use handler::McpToolHandler;
pub use helpers::{format_file_list, pretty_json};
pub use list_files_in_dir::ListFilesInDirHandler;
pub use list_files_in_vault::ListFilesInVaultHandler;
pub use move_file::MoveFileHandler;
pub use patch_content::PatchContentHandler;
pub use registry::ToolRegistry;
pub use rename_file::RenameFileHandler;
pub use simple_search::SimpleSearchHandler;
