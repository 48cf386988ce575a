use linkvault_core::{CreateError, LookupError, StorageError, ValidationError};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid custom id: {0}")]
    InvalidCustomId(#[from] ValidationError),
    #[error("custom id '{0}' already exists")]
    AlreadyExists(String),
    #[error("link not found: {0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for ServiceError {
    fn from(value: StorageError) -> Self {
        Self::Internal(value.to_string())
    }
}

impl From<CreateError> for ServiceError {
    fn from(value: CreateError) -> Self {
        match value {
            CreateError::InvalidCustomId(err) => Self::InvalidCustomId(err),
            CreateError::AlreadyExists(id) => Self::AlreadyExists(id),
            other @ CreateError::Exhausted { .. } => Self::Internal(other.to_string()),
            CreateError::Storage(err) => err.into(),
        }
    }
}

impl From<LookupError> for ServiceError {
    fn from(value: LookupError) -> Self {
        match value {
            LookupError::NotFound(id) => Self::NotFound(id),
            LookupError::Storage(err) => err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_failures_become_internal() {
        let err: ServiceError = StorageError::Timeout("1s".to_string()).into();
        assert!(matches!(err, ServiceError::Internal(_)));

        let err: ServiceError = CreateError::Storage(StorageError::Unavailable("gone".into())).into();
        assert!(matches!(err, ServiceError::Internal(_)));

        let err: ServiceError = CreateError::Exhausted { attempts: 3 }.into();
        assert!(matches!(err, ServiceError::Internal(_)));
    }

    #[test]
    fn domain_errors_keep_their_kind() {
        let err: ServiceError = CreateError::AlreadyExists("abc".into()).into();
        assert!(matches!(err, ServiceError::AlreadyExists(ref id) if id == "abc"));

        let err: ServiceError = LookupError::NotFound("abc".into()).into();
        assert!(matches!(err, ServiceError::NotFound(ref id) if id == "abc"));

        let err: ServiceError =
            CreateError::InvalidCustomId(ValidationError::Reserved("api".into())).into();
        assert!(matches!(
            err,
            ServiceError::InvalidCustomId(ValidationError::Reserved(_))
        ));
    }
}
