use linkvault_core::StorageError;
use tokio::task::JoinError;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Maps any redb failure onto the store's infrastructure error taxonomy.
pub(crate) fn map_redb_error(err: impl Into<redb::Error>) -> StorageError {
    let err = err.into();
    let message = err.to_string();

    match err {
        redb::Error::DatabaseAlreadyOpen | redb::Error::Io(_) => StorageError::Unavailable(message),
        redb::Error::Corrupted(_) => StorageError::InvalidData(message),
        _ => StorageError::Operation(message),
    }
}

pub(crate) fn map_join_error(err: JoinError) -> StorageError {
    StorageError::Operation(format!("storage task did not complete: {err}"))
}

pub(crate) fn encode_error(err: serde_json::Error) -> StorageError {
    StorageError::Serialization(err.to_string())
}

pub(crate) fn decode_error(key: &str, err: serde_json::Error) -> StorageError {
    StorageError::InvalidData(format!("record '{key}' cannot be decoded: {err}"))
}
