use serde::{Deserialize, Serialize};

use super::defaults;

/// Learning subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Learning rate used when a feedback call does not supply one.
    /// Must be positive; the learner rejects anything else. Updates are
    /// unclamped, so aggressive rates can grow weights without bound.
    pub default_learning_rate: f64,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            default_learning_rate: defaults::DEFAULT_LEARNING_RATE,
        }
    }
}
