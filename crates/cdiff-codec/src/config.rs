use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CodecError, CodecResult};

/// Default payload limit: 16 MiB.
pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = 16 * 1024 * 1024;

/// Configuration for [`JsonCodec`](crate::JsonCodec).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Largest accepted encoded payload in bytes. `0` disables the limit.
    pub max_payload_size: usize,
    /// Emit indented JSON instead of compact JSON.
    pub pretty: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
            pretty: false,
        }
    }
}

impl CodecConfig {
    /// Compact output with the default size limit.
    pub fn compact() -> Self {
        Self::default()
    }

    /// Indented output, for logs and fixtures meant to be read by people.
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Default::default()
        }
    }

    /// Parse a config from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> CodecResult<Self> {
        toml::from_str(s).map_err(|e| CodecError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> CodecResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        debug!(path = %path.display(), "loaded codec config");
        Ok(config)
    }

    /// Returns `true` if `size` bytes fit within the configured limit.
    pub fn allows(&self, size: usize) -> bool {
        self.max_payload_size == 0 || size <= self.max_payload_size
    }
}
