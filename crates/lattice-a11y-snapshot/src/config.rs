//! Snapshot configuration.
//!
//! Configuration is plain TOML, typically checked in next to the baselines:
//!
//! ```toml
//! # 0 disables the cycle guard
//! max_depth = 256
//! normalize_unknown_contexts = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::describe::{DEFAULT_MAX_DEPTH, DescribeOptions};
use crate::error::{Error, Result};

/// Settings that control how a snapshot is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnapshotConfig {
    /// Maximum tree depth before the render fails as cyclic. `0` means unlimited.
    pub max_depth: usize,
    /// Whether `(unknown context at $<hex>)` tokens are canonicalized.
    ///
    /// Turning this off keeps the raw addresses, so the output is no longer
    /// stable across builds and should not be stored as a baseline.
    pub normalize_unknown_contexts: bool,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            normalize_unknown_contexts: true,
        }
    }
}

impl SnapshotConfig {
    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config(e.to_string()))
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded snapshot configuration");
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::config(e.to_string()))
    }

    /// The describer options implied by this configuration.
    pub fn describe_options(&self) -> DescribeOptions {
        DescribeOptions {
            max_depth: (self.max_depth != 0).then_some(self.max_depth),
        }
    }
}
