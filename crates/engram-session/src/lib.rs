//! # engram-session
//!
//! Composition root for the Engram ranking system. A [`Session`] owns one
//! derived identity and one loaded weight matrix, and exposes rank,
//! feedback, and save as a cohesive unit: every call goes through the same
//! key, the same dimension, and the same matrix instance.
//!
//! Lifecycle: open derives the identity once and loads (or freshly
//! initializes) the matrix; rank and feedback cycle against the in-memory
//! matrix; save is the only operation that touches durable state. Dropping
//! a session discards unsaved learning.
//!
//! Hosts serving many callers use [`SessionManager`] to funnel all access
//! to one identity through a single shared session, which is what makes
//! feedback read-modify-write safe in-process. The [`functional`] module
//! offers the stateless per-call surface for callers that do not want to
//! hold a session at all.

pub mod analytics;
pub mod functional;
pub mod manager;
pub mod session;

pub use analytics::SessionAnalytics;
pub use manager::SessionManager;
pub use session::Session;
