//! Property tests: save→load reproduces the exact matrix for any dimension
//! and any finite weights.

use proptest::prelude::*;

use engram_core::traits::IModelStore;
use engram_core::{SessionIdentity, WeightMatrix};
use engram_storage::FileModelStore;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_save_load_roundtrip(
        dim in 1usize..8,
        seed in proptest::collection::vec(-100.0f64..100.0, 64),
        session in "[a-z0-9]{1,12}",
    ) {
        let weights: Vec<f64> = seed.iter().cycle().take(dim * dim).copied().collect();
        let matrix = WeightMatrix::from_parts(dim, weights).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let store = FileModelStore::open(dir.path()).unwrap();
        let id = SessionIdentity::derive("prop_user", "prop_pass", &session).unwrap();

        store.save(&id, &matrix).unwrap();
        let loaded = store.load(&id, dim).unwrap();

        prop_assert_eq!(loaded, matrix);
    }

    #[test]
    fn prop_stored_dimension_matches_saved(
        dim in 1usize..8,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileModelStore::open(dir.path()).unwrap();
        let id = SessionIdentity::derive("prop_user", "prop_pass", "dim").unwrap();

        prop_assert_eq!(store.stored_dimension(&id).unwrap(), None);
        store.save(&id, &WeightMatrix::identity(dim).unwrap()).unwrap();
        prop_assert_eq!(store.stored_dimension(&id).unwrap(), Some(dim));
    }
}
