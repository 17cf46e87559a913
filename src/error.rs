use thiserror::Error;

/// Errors surfaced by puzzle generation, loading and word list handling.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("word list is empty")]
    EmptyWordList,

    #[error("grid size must be greater than zero (got {0})")]
    InvalidGridSize(usize),

    /// Missing or malformed grid, word list or solution data.
    #[error("invalid puzzle content: {0}")]
    InvalidContent(String),

    #[error("puzzle generation task failed: {0}")]
    TaskFailed(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PuzzleError {
    pub fn invalid(message: impl Into<String>) -> Self {
        PuzzleError::InvalidContent(message.into())
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
