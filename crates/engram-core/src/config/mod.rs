//! Configuration: per-subsystem sections with TOML loading.
//!
//! Every field has a default; a partial TOML file overrides only the fields
//! it names.

pub mod defaults;
pub mod learning_config;
pub mod observability_config;
pub mod storage_config;

pub use learning_config::LearningConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Engram system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngramConfig {
    pub storage: StorageConfig,
    pub learning: LearningConfig,
    pub observability: ObservabilityConfig,
}

impl EngramConfig {
    /// Parse a TOML document. Missing sections and fields fall back to
    /// their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
