use lightbox_contracts::media::MediaError;
use lightbox_model::{ClipId, ModelError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    #[error("clip index {index} out of range for sequence of {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("activation of clip {clip} failed: {source}")]
    ActivationFailed {
        clip: ClipId,
        #[source]
        source: MediaError,
    },

    /// A host callback referenced a session, binding or animation that is no
    /// longer live. Always safe to drop.
    #[error("stale callback: {0}")]
    StaleCallback(&'static str),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("invalid carousel configuration: {0}")]
    InvalidConfig(String),

    #[error("carousel driver stopped")]
    DriverClosed,
}

impl CarouselError {
    /// Callback rejections the engine expects during normal operation.
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::StaleCallback(_))
    }
}

impl From<ModelError> for CarouselError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::OutOfRange { index, len } => {
                Self::OutOfRange { index, len }
            }
            other => Self::InvalidState(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CarouselError>;
