use std::path::Path;

use anyhow::Context;
use relay_chain::ChainConfig;
use relay_store::StoreConfig;
use serde::{Deserialize, Serialize};

/// Settings for both walkthroughs, read from an optional TOML file.
///
/// ```toml
/// [chain]
/// report_unhandled = true
///
/// [store]
/// reject_duplicate_ids = true
/// report_missing_edits = false
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub chain: ChainConfig,
    pub store: StoreConfig,
}

impl RelayConfig {
    /// Load from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}
