use thiserror::Error;

/// Result alias for store-contract operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Errors surfaced by store backends.
///
/// Absent keys are not errors: lookups return `Ok(None)`. `KeyExists` is an
/// expected, transient signal consumed by the allocation retry loop and
/// never reaches callers of the engine.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("key already exists: {0}")]
    KeyExists(String),
    #[error("storage backend failure: {0}")]
    Backend(String),
}
