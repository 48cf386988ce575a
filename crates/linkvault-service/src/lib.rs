//! Link service facade.
//!
//! [`LinkService`] is the entry point for outer layers (HTTP handlers, the
//! admin binary). It shapes caller input, delegates to a [`LinkStore`] and
//! collapses infrastructure failures into an opaque internal error.
//!
//! [`LinkStore`]: linkvault_core::LinkStore

pub mod error;
pub mod service;

pub use error::ServiceError;
pub use service::LinkService;
