use std::path::PathBuf;
use std::time::Duration;
use typed_builder::TypedBuilder;

/// Default file name of the store.
pub const DEFAULT_PATH: &str = "links.db";
/// Default name of the table holding all links.
pub const DEFAULT_BUCKET: &str = "links";
/// How long opening waits for another process to release the file.
pub const DEFAULT_OPEN_TIMEOUT: Duration = Duration::from_secs(1);
/// How long a write waits for the single writer slot.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings for opening a [`RedbLinkStore`](crate::RedbLinkStore).
#[derive(Debug, Clone, TypedBuilder)]
pub struct StoreConfig {
    /// Path of the database file. Created if missing.
    #[builder(default = PathBuf::from(DEFAULT_PATH), setter(into))]
    pub path: PathBuf,
    /// Name of the bucket (redb table) holding the links.
    #[builder(default = DEFAULT_BUCKET.to_string(), setter(into))]
    pub bucket: String,
    #[builder(default = DEFAULT_OPEN_TIMEOUT)]
    pub open_timeout: Duration,
    #[builder(default = DEFAULT_LOCK_TIMEOUT)]
    pub lock_timeout: Duration,
}
