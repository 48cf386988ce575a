use crate::error::{CreateError, LookupError, StorageError};
use crate::shortcode::{RequestedIdentifier, ShortCode};
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored link, keyed by its short code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// The identifier the link is stored under.
    #[serde(rename = "short")]
    pub code: ShortCode,
    /// The destination URL. Never changes after creation.
    #[serde(rename = "original")]
    pub destination: String,
    /// When the link was created.
    pub created_at: Timestamp,
    /// How many times the link has been resolved.
    pub clicks: u64,
}

impl LinkRecord {
    /// A fresh record with zero clicks, created now.
    pub fn new(code: ShortCode, destination: impl Into<String>) -> Self {
        Self {
            code,
            destination: destination.into(),
            created_at: Timestamp::now(),
            clicks: 0,
        }
    }
}

/// Durable, uniquely-keyed storage of link records.
///
/// Every mutating operation runs its read-check-write sequence inside a single
/// transaction of the underlying engine, so concurrent callers never observe
/// or produce a duplicate identifier.
#[async_trait]
pub trait LinkStore: Send + Sync + 'static {
    /// Creates a link and returns the identifier actually used.
    ///
    /// Custom identifiers are validated and rejected with
    /// [`CreateError::AlreadyExists`] when taken. Generated identifiers are
    /// re-drawn until a free one is found.
    async fn create(
        &self,
        destination: &str,
        requested: RequestedIdentifier,
    ) -> Result<ShortCode, CreateError>;

    /// Returns the destination stored for `code`.
    async fn get(&self, code: &ShortCode) -> Result<String, LookupError>;

    /// Returns the whole record stored for `code`.
    async fn find(&self, code: &ShortCode) -> Result<LinkRecord, LookupError>;

    /// Adds one to the click counter of `code`.
    ///
    /// A missing record is not an error: the link may have been deleted
    /// between the redirect and the increment.
    async fn increment_clicks(&self, code: &ShortCode) -> Result<(), StorageError>;

    /// Deletes the record for `code`, failing with
    /// [`LookupError::NotFound`] if there is nothing to delete.
    async fn delete(&self, code: &ShortCode) -> Result<(), LookupError>;

    /// Returns every record from one consistent snapshot, in key order.
    async fn list_all(&self) -> Result<Vec<LinkRecord>, StorageError>;
}
