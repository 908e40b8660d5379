pub mod cache_config;
pub mod engine_config;
pub mod limits_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use cache_config::CacheConfig;
pub use engine_config::{EngineConfig, EngineConfigOverrides};
pub use limits_config::LimitsConfig;

/// Top-level configuration aggregating all subsystem configs.
///
/// ```toml
/// [engine]
/// min_confidence = 60
/// document_type = "business"
///
/// [cache]
/// capacity = 1024
///
/// [limits]
/// rule_timeout_ms = 100
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QuillConfig {
    /// Session defaults layered over `EngineConfig::default()`.
    pub engine: EngineConfigOverrides,
    pub cache: CacheConfig,
    pub limits: LimitsConfig,
}

impl QuillConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(
            capacity = config.cache.effective_capacity(),
            rule_timeout_ms = config.limits.effective_rule_timeout_ms(),
            "config loaded"
        );
        Ok(config)
    }

    /// Resolve the engine section against the built-in defaults.
    pub fn resolved_engine(&self) -> EngineConfig {
        EngineConfig::default().merge(&self.engine)
    }
}
