/// Dimension and shape contract violations. Shapes are never coerced:
/// any mismatch between a matrix, a vector, or a declared dimension fails.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("dimension mismatch: expected length {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("candidate row {row} has width {actual}, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("requested dimension {requested} does not match stored model dimension {stored}")]
    StoredDimensionMismatch { requested: usize, stored: usize },

    #[error(
        "feedback arrays disagree: {candidates} candidates, {queries} queries, {labels} labels"
    )]
    RecordCountMismatch {
        candidates: usize,
        queries: usize,
        labels: usize,
    },

    #[error("ordering has {actual} entries for {expected} feedback records")]
    OrderingLengthMismatch { expected: usize, actual: usize },

    #[error("no persisted model exists and no dimension was declared")]
    DimensionUnspecified,

    #[error("model dimension must be at least 1")]
    ZeroDimension,
}
