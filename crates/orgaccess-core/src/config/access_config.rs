//! Top-level configuration with layered resolution.
//!
//! # Examples
//!
//! ```
//! use orgaccess_core::config::AccessConfig;
//!
//! let config = AccessConfig::from_toml("[policy]\ncross_organisation_global_roles = true").unwrap();
//! assert!(config.policy.cross_organisation_global_roles);
//! assert_eq!(config.storage.read_pool_size, 4);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{PolicyConfig, StorageConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ORGACCESS_*`)
/// 2. TOML config file
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    pub storage: StorageConfig,
    pub policy: PolicyConfig,
    /// Default tracing filter when `ORGACCESS_LOG` is unset. Default: "info".
    pub log_level: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            policy: PolicyConfig::default(),
            log_level: constants::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AccessConfig {
    /// Load configuration: defaults, then `path` if given, then environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `ORGACCESS_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    /// Unparseable values are ignored and the previous value kept.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(constants::ENV_DB_PATH) {
            self.storage.db_path = val;
        }
        if let Some(v) = lookup(constants::ENV_READ_POOL_SIZE).and_then(|s| s.parse().ok()) {
            self.storage.read_pool_size = v;
        }
        if let Some(v) = lookup(constants::ENV_BUSY_TIMEOUT_MS).and_then(|s| s.parse().ok()) {
            self.storage.busy_timeout_ms = v;
        }
        if let Some(v) = lookup(constants::ENV_CROSS_ORG_GLOBAL_ROLES).and_then(|s| s.parse().ok()) {
            self.policy.cross_organisation_global_roles = v;
        }
        if let Some(val) = lookup(constants::LOG_ENV_VAR) {
            self.log_level = val;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.db_path.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "storage.db_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !(1..=constants::MAX_READ_POOL_SIZE).contains(&self.storage.read_pool_size) {
            return Err(ConfigError::ValidationFailed {
                field: "storage.read_pool_size".to_string(),
                message: format!("must be between 1 and {}", constants::MAX_READ_POOL_SIZE),
            });
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "log_level".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
