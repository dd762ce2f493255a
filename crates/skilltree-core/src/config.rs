//! Index configuration
//!
//! `IndexConfig` is read from a TOML table. Missing fields fall back to
//! [`IndexConfig::default`], and [`IndexConfig::validate`] is applied by every
//! loader so an invalid file never reaches the index.

use crate::identifiers::Identity;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound accepted for `capacity_hint`.
pub const MAX_CAPACITY_HINT: usize = 1 << 16;

/// Identity allowed to mutate the hierarchy when none is configured.
pub const DEFAULT_CONTROLLER: &str = "common-colony";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file {path}: {message}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        message: String,
    },

    /// The configuration was not valid TOML for this schema
    #[error("Invalid TOML: {0}")]
    Parse(String),

    /// A field failed validation
    #[error("Field '{field}': {message}")]
    Invalid {
        /// Offending field
        field: String,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Runtime configuration for a hierarchy index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// The single identity allowed to insert nodes
    pub controller: Identity,
    /// Expected number of nodes, used to pre-size the arena
    pub capacity_hint: usize,
    /// Record each new node on every ancestor's descendant list.
    ///
    /// Turns descendant queries into O(1) lookups at the cost of an O(depth)
    /// walk on every insertion and O(n * depth) stored ids. When off, those
    /// queries scan later nodes instead and insertion stays O(log depth).
    pub track_descendants: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            controller: Identity::new(DEFAULT_CONTROLLER),
            capacity_hint: 1024,
            track_descendants: false,
        }
    }
}

impl IndexConfig {
    /// Configuration with the given controller and default everything else.
    pub fn with_controller(controller: impl Into<Identity>) -> Self {
        Self {
            controller: controller.into(),
            ..Self::default()
        }
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: IndexConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Check field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.controller.is_blank() {
            return Err(ConfigError::invalid("controller", "must not be empty"));
        }
        if self.capacity_hint > MAX_CAPACITY_HINT {
            return Err(ConfigError::invalid(
                "capacity_hint",
                format!(
                    "must be at most {MAX_CAPACITY_HINT} (got {})",
                    self.capacity_hint
                ),
            ));
        }
        Ok(())
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
