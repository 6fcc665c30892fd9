//! Tunnel config files (wormhole.toml)
//!
//! ```toml
//! # Optional: fixed jitter seed for reproducible meshes
//! seed = 42
//!
//! [tunnel]
//! length = 200.0
//! start_diameter = 40.0
//! end_diameter = 40.0
//! variance = 0.1
//! ring_subdivs = 200
//! tunnel_subdivs = 200
//! colors = [0xff00ff, 0x000000]
//! ```
//!
//! Every field is optional and falls back to [`TunnelParams::default`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::WormholeResult;
use crate::params::TunnelParams;

/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = "wormhole.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TunnelConfig {
    /// Jitter seed; a fresh one is drawn when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub tunnel: TunnelParams,
}

impl TunnelConfig {
    /// Load config from file
    pub fn load(path: &Path) -> WormholeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse config from string
    pub fn parse(content: &str) -> WormholeResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> WormholeResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write config to file, creating parent directories
    ///
    /// Colors are stored as `0xRRGGBB`, so stops that are not exact multiples
    /// of 1/255 come back rounded to the nearest byte.
    pub fn save(&self, path: &Path) -> WormholeResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
