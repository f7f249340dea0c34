//! Test fixture loader for Engram golden datasets.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the fixtures folder, resolved against this crate so
/// it works from any consumer in the workspace.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// A labeled ranking round with its expected untrained ordering.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenRankingScenario {
    pub description: String,
    pub dimension: usize,
    pub query: Vec<f64>,
    pub candidates: Vec<Vec<f64>>,
    /// Binary relevance judgment per candidate.
    pub labels: Vec<f64>,
    /// Ordering a fresh (identity-weight) model must produce.
    pub expected_initial_ordering: Vec<usize>,
}

/// Load the standard golden ranking scenario.
pub fn golden_ranking() -> GoldenRankingScenario {
    load_fixture("golden_ranking.json")
}
