//! Service container for MCP tool handlers.
//!
//! Provides shared access to configuration and gateway construction for all
//! tool handlers. The real path builds a fresh [`ObsidianClient`] per tool
//! invocation; tests inject a recording gateway instead.

use crate::core::client::{ObsidianClient, VaultApi};
use crate::core::config::Config;
use crate::core::error::Result;
use std::sync::Arc;

pub struct Services {
    pub config: Arc<Config>,
    gateway_override: Option<Arc<dyn VaultApi>>,
}

impl Services {
    /// Create new services from configuration
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            gateway_override: None,
        }
    }

    /// Create services with a fixed gateway (test seam)
    pub fn with_gateway(config: Config, gateway: Arc<dyn VaultApi>) -> Self {
        Self {
            config: Arc::new(config),
            gateway_override: Some(gateway),
        }
    }

    /// Resolve the gateway for one tool invocation.
    ///
    /// Fails with a configuration error when no API key is configured; the
    /// error surfaces to the caller before any network activity.
    pub fn gateway(&self) -> Result<Arc<dyn VaultApi>> {
        if let Some(gateway) = &self.gateway_override {
            return Ok(Arc::clone(gateway));
        }
        Ok(Arc::new(ObsidianClient::from_config(&self.config)?))
    }
}
