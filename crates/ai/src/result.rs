use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AiError {
    /// Probability vector and label set are not index-aligned.
    #[error("input shape mismatch: {probabilities} probabilities for {labels} labels")]
    InputShape { probabilities: usize, labels: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("inference failed: {0}")]
    InferenceFailed(String),
}
