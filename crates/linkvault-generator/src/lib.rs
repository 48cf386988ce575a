//! Identifier generation and custom identifier validation.
//!
//! Everything in this crate is pure: no store access, no I/O beyond reading
//! the operating system's randomness.

pub mod custom;
pub mod random;
pub mod scripted;

pub use custom::{custom_code, validate_custom, RESERVED};
pub use random::{generate_secure, generate_standard};

use linkvault_core::{ShortCode, Strength};

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// They give no uniqueness guarantee; the store re-draws on collision.
pub trait Generator: Send + Sync + 'static {
    /// Generates a candidate short code of the given strength.
    fn generate(&self, strength: Strength) -> ShortCode;
}

/// The production generator, backed by a cryptographically secure RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl Generator for RandomGenerator {
    fn generate(&self, strength: Strength) -> ShortCode {
        match strength {
            Strength::Standard => generate_standard(),
            Strength::Secure => generate_secure(),
        }
    }
}
