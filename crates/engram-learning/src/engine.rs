//! Feedback application: validate the whole batch, then update sequentially.

use tracing::debug;

use engram_core::errors::{EngramResult, LearningError, ShapeError};
use engram_core::matrix::{dot, WeightMatrix};
use engram_core::models::FeedbackOutcome;

/// Apply one batch of binary relevance feedback to the matrix.
///
/// For each record `i`, in input order:
/// `predicted = candidates[i] · (W · queries[i])`,
/// `error = labels[i] − predicted`, then
/// `W += learning_rate · error · outer(queries[i], candidates[i])`.
///
/// The error signal is linear (delta rule), not logistic: `predicted` is an
/// unbounded real and is used as-is. No normalization or clamping follows
/// the update.
///
/// The batch is validated in full before the first update, so a rejected
/// batch leaves the matrix exactly as it was. An empty batch is valid and
/// applies nothing.
pub fn apply_feedback(
    matrix: &mut WeightMatrix,
    candidates: &[Vec<f64>],
    queries: &[Vec<f64>],
    labels: &[f64],
    learning_rate: f64,
) -> EngramResult<FeedbackOutcome> {
    if !(learning_rate.is_finite() && learning_rate > 0.0) {
        return Err(LearningError::InvalidRate {
            rate: learning_rate,
        }
        .into());
    }
    if candidates.len() != queries.len() || candidates.len() != labels.len() {
        return Err(ShapeError::RecordCountMismatch {
            candidates: candidates.len(),
            queries: queries.len(),
            labels: labels.len(),
        }
        .into());
    }
    let dim = matrix.dimension();
    for (row, candidate) in candidates.iter().enumerate() {
        if candidate.len() != dim {
            return Err(ShapeError::RowWidthMismatch {
                row,
                expected: dim,
                actual: candidate.len(),
            }
            .into());
        }
    }
    for (row, query) in queries.iter().enumerate() {
        if query.len() != dim {
            return Err(ShapeError::RowWidthMismatch {
                row,
                expected: dim,
                actual: query.len(),
            }
            .into());
        }
    }
    for (index, &label) in labels.iter().enumerate() {
        if label != 0.0 && label != 1.0 {
            return Err(LearningError::InvalidLabel { index, value: label }.into());
        }
    }

    let mut outcome = FeedbackOutcome::default();
    for ((candidate, query), &label) in candidates.iter().zip(queries).zip(labels) {
        let transformed = matrix.transform(query)?;
        let predicted = dot(candidate, &transformed);
        let error = label - predicted;
        matrix.rank_one_update(learning_rate * error, query, candidate)?;

        outcome.records_applied += 1;
        outcome.total_absolute_error += error.abs();
    }

    debug!(
        records = outcome.records_applied,
        mean_abs_error = outcome.mean_absolute_error(),
        learning_rate,
        "feedback batch applied"
    );
    Ok(outcome)
}
