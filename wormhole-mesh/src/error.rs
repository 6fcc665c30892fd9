//! Error types for tunnel generation.

use thiserror::Error;

/// Result alias used by every fallible operation in this crate.
pub type WormholeResult<T> = Result<T, WormholeError>;

/// Errors produced while generating or exporting a tunnel mesh.
///
/// Generation only ever fails with [`WormholeError::InvalidParameter`]; the
/// remaining variants come from loading configuration or writing exports.
#[derive(Debug, Error)]
pub enum WormholeError {
    /// A generation parameter is degenerate (zero subdivisions, empty color
    /// list, non-positive dimension, ...).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O failure while reading a config or writing an export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for a tunnel config.
    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    /// Serialization of buffers or config failed.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl WormholeError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

impl From<serde_json::Error> for WormholeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

impl From<toml::ser::Error> for WormholeError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}
