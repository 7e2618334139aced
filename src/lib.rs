//! Obsidian MCP - Bridge between the Obsidian Local REST API and MCP
//!
//! A stdio MCP server that exposes an Obsidian vault (via the Local REST
//! API community plugin) as a set of callable tools for coding agents.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, path, types
//!   - client (HTTPS gateway to the REST plugin)
//!   - services (per-call gateway construction)
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, protocol, handlers, tools
//!
//! # Key Features
//!
//! - Ten vault tools (list, read, search, append, patch, delete, rename, move)
//! - Per-segment percent-encoded vault paths (slashes preserved)
//! - Same-directory guard on rename, explicit confirm on delete
//! - Typed error mapping for 404 / 409 / upstream error bodies

// Core domain logic (protocol-agnostic)
pub mod core;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Re-export commonly used types for convenience
pub use crate::core::client::{ObsidianClient, VaultApi};
pub use crate::core::config::Config;
pub use crate::core::error::{ObsidianError, Result};
pub use crate::core::services::Services;
