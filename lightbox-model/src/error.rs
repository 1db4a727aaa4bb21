use thiserror::Error;

/// Errors produced by model constructors and sequence lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("index {index} is outside the sequence (length {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("invalid clip: {0}")]
    InvalidClip(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
