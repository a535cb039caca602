//! Error types for the quote recommendation core

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by tag detection, ranking and the quote store
#[derive(Error, Debug)]
pub enum Error {
    /// Caller supplied an argument the operation cannot accept
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The embedding provider failed or could not be loaded
    #[error("embedding unavailable: {0}")]
    EmbeddingUnavailable(String),

    /// The quote store could not be read or written
    #[error("store error: {0}")]
    Store(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn embedding(err: anyhow::Error) -> Self {
        Error::EmbeddingUnavailable(format!("{:#}", err))
    }
}
