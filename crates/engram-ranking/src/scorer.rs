//! Inner-product scoring through the learned transform.

use engram_core::errors::{EngramResult, ShapeError};
use engram_core::matrix::{dot, WeightMatrix};

/// Score every candidate against the query: `score_i = candidates[i] · (W · query)`.
///
/// The transformed query is computed once and reused across candidates.
/// Every candidate row must have the matrix dimension as its width; the
/// first offending row is reported and nothing is scored.
pub fn scores(
    matrix: &WeightMatrix,
    candidates: &[Vec<f64>],
    query: &[f64],
) -> EngramResult<Vec<f64>> {
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
    let transformed = matrix.transform(query)?;
    Ok(candidates
        .iter()
        .map(|candidate| dot(candidate, &transformed))
        .collect())
}
