//! Property tests: zero-error batches never move the matrix, and any
//! applied batch is reproducible for a fixed record order.

use proptest::prelude::*;

use engram_core::WeightMatrix;
use engram_learning::apply_feedback;

fn truncate_rows(rows: &[Vec<f64>], dim: usize) -> Vec<Vec<f64>> {
    rows.iter()
        .map(|r| r.iter().take(dim).copied().collect())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_fixed_order_is_reproducible(
        dim in 1usize..5,
        rows in proptest::collection::vec(proptest::collection::vec(-2.0f64..2.0, 5), 1..8),
        qrows in proptest::collection::vec(proptest::collection::vec(-2.0f64..2.0, 5), 8),
        label_bits in proptest::collection::vec(proptest::bool::ANY, 8),
        rate in 0.01f64..2.0,
    ) {
        let n = rows.len();
        let candidates = truncate_rows(&rows, dim);
        let queries = truncate_rows(&qrows[..n], dim);
        let labels: Vec<f64> = label_bits[..n].iter().map(|&b| if b { 1.0 } else { 0.0 }).collect();

        let mut first = WeightMatrix::identity(dim).unwrap();
        apply_feedback(&mut first, &candidates, &queries, &labels, rate).unwrap();

        let mut second = WeightMatrix::identity(dim).unwrap();
        apply_feedback(&mut second, &candidates, &queries, &labels, rate).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_outcome_counts_every_record(
        dim in 1usize..5,
        rows in proptest::collection::vec(proptest::collection::vec(-2.0f64..2.0, 5), 0..8),
    ) {
        let n = rows.len();
        let candidates = truncate_rows(&rows, dim);
        let queries = candidates.clone();
        let labels = vec![1.0; n];

        let mut m = WeightMatrix::identity(dim).unwrap();
        let outcome = apply_feedback(&mut m, &candidates, &queries, &labels, 0.5).unwrap();
        prop_assert_eq!(outcome.records_applied, n);
    }

    #[test]
    fn prop_zero_error_feedback_is_identity_preserving(
        dim in 1usize..5,
        axis in 0usize..5,
    ) {
        let axis = axis % dim;
        // Unit basis vector: against the identity matrix it predicts exactly
        // its own label of 1, so the update is a strict no-op.
        let mut basis = vec![0.0; dim];
        basis[axis] = 1.0;

        let mut m = WeightMatrix::identity(dim).unwrap();
        let before = m.clone();
        apply_feedback(
            &mut m,
            &[basis.clone()],
            &[basis],
            &[1.0],
            1.0,
        )
        .unwrap();
        prop_assert_eq!(m, before);
    }
}
