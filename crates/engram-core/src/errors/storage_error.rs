/// Model persistence errors. A corrupt or unreadable persisted model is
/// reported, never silently discarded or replaced with a fresh matrix.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("model I/O failed at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("persisted model at {path} is corrupt: {reason}")]
    Corrupt { path: String, reason: String },

    #[error("persisted model format version {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}
