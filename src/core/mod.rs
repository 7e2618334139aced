//! Core domain logic for the Obsidian bridge.
//!
//! Everything in this module is protocol-agnostic: the MCP adapter sits on
//! top of it, and nothing here knows about JSON-RPC.

pub mod client;
pub mod config;
pub mod error;
pub mod path;
pub mod services;
pub mod types;

pub use client::{ObsidianClient, VaultApi};
pub use config::Config;
pub use error::{ObsidianError, Result};
pub use services::Services;
pub use types::{PatchOperation, PatchTargetType};
