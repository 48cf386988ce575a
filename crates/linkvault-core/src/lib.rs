//! Core types and traits for the linkvault URL shortener.
//!
//! This crate provides the types shared by the identifier generator, the
//! persistent link store and the service facade built on top of them.

pub mod error;
pub mod repository;
pub mod shortcode;

pub use error::{CreateError, LookupError, StorageError, ValidationError};
pub use repository::{LinkRecord, LinkStore};
pub use shortcode::{RequestedIdentifier, ShortCode, Strength};
