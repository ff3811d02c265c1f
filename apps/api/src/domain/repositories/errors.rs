use thiserror::Error;

/// Errors surfaced by storage adapters and the repositories built on them
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Username already registered: {0}")]
    DuplicateUsername(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
