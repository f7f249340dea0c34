// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_MODEL_DIR: &str = "models";

// --- Learning ---
pub const DEFAULT_LEARNING_RATE: f64 = 1.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
