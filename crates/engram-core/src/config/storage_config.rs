use serde::{Deserialize, Serialize};

use super::defaults;

/// Storage subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one model file per session identity.
    pub model_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            model_dir: defaults::DEFAULT_MODEL_DIR.to_string(),
        }
    }
}
