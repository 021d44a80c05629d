//! Engine error types.

use thiserror::Error;

/// Errors surfaced by engine operations.
///
/// Every failing operation leaves the engine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The key does not currently resolve to a value.
    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    /// Commit or rollback was requested with no transaction open.
    #[error("no active transaction")]
    NoActiveTransaction,
}

impl EngineError {
    pub fn key_not_found(key: &[u8]) -> Self {
        Self::KeyNotFound {
            key: String::from_utf8_lossy(key).into_owned(),
        }
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
