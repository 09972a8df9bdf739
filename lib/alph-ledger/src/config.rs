use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{cache::CacheConfig, network::Network, retry::RetryPolicy, PagePolicy, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub network: Network,
    /// Overrides the network's default explorer backend.
    pub backend_url: Option<String>,
    pub retry: RetryPolicy,
    pub cache: CacheConfig,
    pub page_policy: PagePolicy,
}

impl LedgerConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn backend_url(&self) -> &str {
        self.backend_url
            .as_deref()
            .unwrap_or_else(|| self.network.backend_url())
    }
}
