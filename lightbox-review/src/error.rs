use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("failed to access review store {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("review data is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("no changes to export")]
    NothingToExport,
    /// Failure reported by a [`KeyValueStore`](crate::KeyValueStore)
    /// backend that is not file based, such as browser storage over quota.
    #[error("review storage error: {0}")]
    Storage(String),
    #[error("invalid review configuration: {0}")]
    InvalidConfig(String),
}
