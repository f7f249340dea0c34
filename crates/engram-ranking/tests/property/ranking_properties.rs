//! Property tests: the ordering is always a permutation of 0..N and is
//! stable across repeated calls.

use proptest::prelude::*;

use engram_core::WeightMatrix;
use engram_ranking::rank;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_rank_returns_permutation(
        dim in 1usize..6,
        rows in proptest::collection::vec(proptest::collection::vec(-10.0f64..10.0, 6), 0..12),
        qseed in proptest::collection::vec(-10.0f64..10.0, 6),
    ) {
        let query: Vec<f64> = qseed.iter().take(dim).copied().collect();
        let candidates: Vec<Vec<f64>> = rows
            .iter()
            .map(|r| r.iter().take(dim).copied().collect())
            .collect();
        let m = WeightMatrix::identity(dim).unwrap();

        let ordering = rank(&m, &candidates, &query).unwrap();

        prop_assert_eq!(ordering.len(), candidates.len());
        let mut seen = vec![false; candidates.len()];
        for &idx in &ordering {
            prop_assert!(idx < candidates.len());
            prop_assert!(!seen[idx], "index repeated in ordering");
            seen[idx] = true;
        }
    }

    #[test]
    fn prop_rank_is_deterministic(
        dim in 1usize..6,
        rows in proptest::collection::vec(proptest::collection::vec(-10.0f64..10.0, 6), 0..10),
        qseed in proptest::collection::vec(-10.0f64..10.0, 6),
    ) {
        let query: Vec<f64> = qseed.iter().take(dim).copied().collect();
        let candidates: Vec<Vec<f64>> = rows
            .iter()
            .map(|r| r.iter().take(dim).copied().collect())
            .collect();
        let m = WeightMatrix::identity(dim).unwrap();

        let first = rank(&m, &candidates, &query).unwrap();
        let second = rank(&m, &candidates, &query).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_scores_sorted_descending_along_ordering(
        dim in 1usize..6,
        rows in proptest::collection::vec(proptest::collection::vec(-10.0f64..10.0, 6), 1..10),
        qseed in proptest::collection::vec(-10.0f64..10.0, 6),
    ) {
        let query: Vec<f64> = qseed.iter().take(dim).copied().collect();
        let candidates: Vec<Vec<f64>> = rows
            .iter()
            .map(|r| r.iter().take(dim).copied().collect())
            .collect();
        let m = WeightMatrix::identity(dim).unwrap();

        let scores = engram_ranking::scores(&m, &candidates, &query).unwrap();
        let ordering = rank(&m, &candidates, &query).unwrap();
        for pair in ordering.windows(2) {
            prop_assert!(scores[pair[0]] >= scores[pair[1]]);
        }
    }
}
