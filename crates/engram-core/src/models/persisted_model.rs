use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MODEL_FORMAT_VERSION;
use crate::errors::ShapeError;
use crate::matrix::WeightMatrix;

/// Durable representation of one session's weight matrix.
///
/// Owned exclusively by the model store: created on first save, overwritten
/// (not appended) on every later save. `format_version` gates deserialization;
/// readers reject unknown versions instead of guessing a layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedModel {
    pub format_version: u32,
    pub dimension: usize,
    pub saved_at: DateTime<Utc>,
    /// Row-major weights, `dimension * dimension` entries.
    pub weights: Vec<f64>,
}

impl PersistedModel {
    /// Snapshot a matrix for persistence, stamped with the current time.
    pub fn from_matrix(matrix: &WeightMatrix) -> Self {
        Self {
            format_version: MODEL_FORMAT_VERSION,
            dimension: matrix.dimension(),
            saved_at: Utc::now(),
            weights: matrix.as_slice().to_vec(),
        }
    }

    /// Rebuild the in-memory matrix. Fails if the stored weight count does
    /// not agree with the stored dimension.
    pub fn into_matrix(self) -> Result<WeightMatrix, ShapeError> {
        WeightMatrix::from_parts(self.dimension, self.weights)
    }
}
