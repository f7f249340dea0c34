//! Data models shared across crates.

pub mod feedback_outcome;
pub mod persisted_model;

pub use feedback_outcome::FeedbackOutcome;
pub use persisted_model::PersistedModel;
