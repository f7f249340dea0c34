//! Error types, one enum per subsystem, plus the workspace-wide umbrella.

pub mod identity_error;
pub mod learning_error;
pub mod shape_error;
pub mod storage_error;

pub use identity_error::IdentityError;
pub use learning_error::LearningError;
pub use shape_error::ShapeError;
pub use storage_error::StorageError;

/// Umbrella error for the whole system. Subsystem errors convert via `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngramError {
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Learning(#[from] LearningError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A panic while a lock was held left shared state suspect.
    #[error("internal lock poisoned: {context}")]
    LockPoisoned { context: &'static str },
}

pub type EngramResult<T> = Result<T, EngramError>;
