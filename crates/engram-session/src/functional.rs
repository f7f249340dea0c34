//! Stateless per-call surface: every call re-derives the identity and
//! reloads the model instead of holding a long-lived [`Session`].
//!
//! Semantically identical to the session methods; the cost is one model
//! load per call (and one save for feedback, since the transient session
//! ends when the call returns). Hosts with a call cadence worth caring
//! about should hold a [`Session`] or use the
//! [`SessionManager`](crate::SessionManager) instead.

use std::path::Path;

use engram_core::errors::{EngramResult, ShapeError};
use engram_core::models::FeedbackOutcome;

use crate::session::Session;

/// Rank candidates for a (user, session) pair, loading its model from
/// `model_dir`. The model dimension is taken from the query width when no
/// model is persisted yet.
pub fn rank(
    user_id: &str,
    credential: &str,
    session_id: &str,
    candidates: &[Vec<f64>],
    query: &[f64],
    model_dir: impl AsRef<Path>,
) -> EngramResult<Vec<usize>> {
    let session = Session::open_dir(
        user_id,
        credential,
        session_id,
        model_dir,
        Some(query.len()),
    )?;
    session.rank(candidates, query)
}

/// Apply feedback for a (user, session) pair and persist the updated model.
///
/// The dimension is taken from the first record when no model is persisted
/// yet. An entirely empty batch is a no-op that touches nothing on disk.
pub fn feedback(
    user_id: &str,
    credential: &str,
    session_id: &str,
    candidates: &[Vec<f64>],
    queries: &[Vec<f64>],
    labels: &[f64],
    ordering: Option<&[usize]>,
    model_dir: impl AsRef<Path>,
) -> EngramResult<FeedbackOutcome> {
    let dimension = queries
        .first()
        .or_else(|| candidates.first())
        .map(|v| v.len());
    let Some(dimension) = dimension else {
        if labels.is_empty() && ordering.map_or(true, |o| o.is_empty()) {
            return Ok(FeedbackOutcome::default());
        }
        return Err(ShapeError::RecordCountMismatch {
            candidates: 0,
            queries: 0,
            labels: labels.len(),
        }
        .into());
    };

    let session = Session::open_dir(
        user_id,
        credential,
        session_id,
        model_dir,
        Some(dimension),
    )?;
    let outcome = session.feedback(candidates, queries, labels, ordering, None)?;
    session.save()?;
    Ok(outcome)
}
