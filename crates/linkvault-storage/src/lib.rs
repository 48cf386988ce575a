//! Persistent link storage backed by a single redb file.
//!
//! [`RedbLinkStore`] implements [`LinkStore`] on top of one redb table (the
//! bucket). redb allows a single writer and any number of snapshot readers,
//! which is the only synchronization the store relies on for uniqueness.

pub mod config;
pub mod error;
pub mod redb_store;

pub use config::StoreConfig;
pub use linkvault_core::{LinkRecord, LinkStore, StorageError};
pub use redb_store::RedbLinkStore;
