/// Engram system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format version written into every persisted model. Readers must reject
/// any other value instead of guessing a layout.
pub const MODEL_FORMAT_VERSION: u32 = 1;

/// File extension for persisted models, appended to the identity key.
pub const MODEL_FILE_EXTENSION: &str = "model.json";
