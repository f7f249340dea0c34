/// Errors from feedback validation. A failing batch is rejected before the
/// first weight update, never partially applied.
#[derive(Debug, thiserror::Error)]
pub enum LearningError {
    #[error("label at record {index} is {value}, relevance labels must be 0 or 1")]
    InvalidLabel { index: usize, value: f64 },

    #[error("learning rate {rate} is not a positive finite number")]
    InvalidRate { rate: f64 },
}
