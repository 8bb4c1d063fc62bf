use taut_core::StoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the allocation engine.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// The submitted URL is empty or does not carry an accepted scheme.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// No forward entry exists for the requested code.
    #[error("unknown short code: {0}")]
    UnknownCode(String),
    /// The store failed; the surrounding transaction was aborted.
    #[error("storage failure: {0}")]
    Store(String),
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            // Collisions are consumed by the allocation loop; one escaping
            // to this conversion means a backend misbehaved.
            StoreError::KeyExists(key) => Self::Store(format!("unexpected key conflict: {key}")),
            StoreError::Backend(message) => Self::Store(message),
        }
    }
}
