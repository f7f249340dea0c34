//! # engram-learning
//!
//! Turns binary relevance feedback into weight-matrix updates.
//!
//! Each record contributes a rank-1 outer-product update scaled by a linear
//! error signal. Records apply sequentially in input order, and every update
//! changes the prediction the next record sees: batch order affects the
//! final matrix. That non-commutativity is part of the contract, not an
//! implementation accident; callers that need reproducible models must fix
//! their batch order.
//!
//! Updates are unclamped. Repeated feedback at an aggressive learning rate
//! can grow weights without bound; the engine reports, it does not correct.

pub mod engine;

pub use engine::apply_feedback;
