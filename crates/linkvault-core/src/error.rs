use thiserror::Error;

/// Reasons a caller-supplied custom identifier is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("custom id must be at least {min} characters long, got {len}")]
    TooShort { len: usize, min: usize },
    #[error("custom id must be no more than {max} characters long, got {len}")]
    TooLong { len: usize, max: usize },
    #[error("custom id can only contain letters, numbers, dashes, and underscores; found {found:?}")]
    InvalidCharacter { found: char },
    #[error("'{0}' is a reserved word and cannot be used as a custom id")]
    Reserved(String),
}

/// Infrastructure failures of the underlying store.
///
/// These are fatal to the operation that hit them but never to the process.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("record serialization failed: {0}")]
    Serialization(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Errors returned when creating a link.
#[derive(Debug, Clone, Error)]
pub enum CreateError {
    #[error("invalid custom id: {0}")]
    InvalidCustomId(#[from] ValidationError),
    #[error("custom id '{0}' already exists")]
    AlreadyExists(String),
    #[error("no free identifier found after {attempts} attempts")]
    Exhausted { attempts: usize },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors returned by operations that address an existing link.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    #[error("link not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound(_))
    }
}
