//! # engram-ranking
//!
//! Scoring and ordering of candidate vectors against a query, through the
//! session's learned weight matrix. Ranking never mutates the matrix; for
//! a fixed matrix and fixed inputs the ordering is a deterministic
//! permutation of the candidate indices.

pub mod engine;
pub mod scorer;

pub use engine::rank;
pub use scorer::scores;
