//! Ordering: indices sorted by score, best first.

use tracing::debug;

use engram_core::errors::EngramResult;
use engram_core::matrix::WeightMatrix;

use crate::scorer;

/// Rank candidates against a query under the given weight matrix.
///
/// Returns the candidate indices sorted by score descending. Ties keep
/// ascending original index, so the result is a deterministic permutation
/// of `0..N` for fixed inputs and a fixed matrix. `N = 0` returns an empty
/// ordering; the query width is still checked against the matrix.
pub fn rank(
    matrix: &WeightMatrix,
    candidates: &[Vec<f64>],
    query: &[f64],
) -> EngramResult<Vec<usize>> {
    let scores = scorer::scores(matrix, candidates, query)?;

    let mut ordering: Vec<usize> = (0..scores.len()).collect();
    // Stable sort preserves ascending index order among equal scores.
    ordering.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(candidates = candidates.len(), "ranked candidate set");
    Ok(ordering)
}

#[cfg(test)]
mod tests {
    use super::*;
    use engram_core::errors::{EngramError, ShapeError};

    #[test]
    fn fresh_model_ranks_by_dot_product() {
        let m = WeightMatrix::identity(2).unwrap();
        let candidates = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.5, 0.5]];
        let ordering = rank(&m, &candidates, &[1.0, 0.0]).unwrap();
        assert_eq!(ordering, vec![0, 2, 1]);
    }

    #[test]
    fn empty_candidate_set_yields_empty_ordering() {
        let m = WeightMatrix::identity(4).unwrap();
        let ordering = rank(&m, &[], &[1.0, 0.0, 0.0, 0.0]).unwrap();
        assert!(ordering.is_empty());
    }

    #[test]
    fn empty_candidate_set_still_checks_query_width() {
        let m = WeightMatrix::identity(4).unwrap();
        assert!(matches!(
            rank(&m, &[], &[1.0]).unwrap_err(),
            EngramError::Shape(ShapeError::DimensionMismatch { expected: 4, actual: 1 })
        ));
    }

    #[test]
    fn single_candidate_ranks_first() {
        let m = WeightMatrix::identity(2).unwrap();
        let ordering = rank(&m, &[vec![0.3, 0.7]], &[1.0, 0.0]).unwrap();
        assert_eq!(ordering, vec![0]);
    }

    #[test]
    fn ties_keep_ascending_index_order() {
        let m = WeightMatrix::identity(2).unwrap();
        // All candidates score identically.
        let candidates = vec![vec![0.5, 0.5]; 4];
        let ordering = rank(&m, &candidates, &[1.0, 1.0]).unwrap();
        assert_eq!(ordering, vec![0, 1, 2, 3]);
    }

    #[test]
    fn ranking_is_deterministic() {
        let mut m = WeightMatrix::identity(3).unwrap();
        m.rank_one_update(0.5, &[1.0, 2.0, 3.0], &[0.1, 0.2, 0.3])
            .unwrap();
        let candidates = vec![
            vec![0.9, 0.1, 0.0],
            vec![0.1, 0.9, 0.0],
            vec![0.0, 0.1, 0.9],
            vec![0.3, 0.3, 0.4],
        ];
        let query = [0.2, 0.5, 0.3];
        let first = rank(&m, &candidates, &query).unwrap();
        for _ in 0..5 {
            assert_eq!(rank(&m, &candidates, &query).unwrap(), first);
        }
    }
}
