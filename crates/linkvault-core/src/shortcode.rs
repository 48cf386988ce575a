use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Standard identifiers are 8 characters long.
pub const STANDARD_LENGTH: usize = 8;
/// Secure identifiers are 16 characters long.
pub const SECURE_LENGTH: usize = 16;

/// The identifier under which a link is stored and resolved.
///
/// A `ShortCode` is either produced by a generator or taken from a custom id
/// that already passed validation. It is compared and stored verbatim,
/// so `MyLink` and `mylink` are different identifiers.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (generators, keys read back from the store) or for lookups, where an
    /// invalid code simply resolves to nothing.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How hard a generated identifier is to guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// Short, convenient identifiers.
    #[default]
    Standard,
    /// Longer identifiers that resist enumeration.
    Secure,
}

impl Strength {
    /// Length in characters of identifiers generated at this strength.
    pub fn length(self) -> usize {
        match self {
            Strength::Standard => STANDARD_LENGTH,
            Strength::Secure => SECURE_LENGTH,
        }
    }
}

impl Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strength::Standard => f.write_str("standard"),
            Strength::Secure => f.write_str("secure"),
        }
    }
}

/// The identifier a caller asks for when creating a link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestedIdentifier {
    /// A user-chosen identifier. It is validated and never substituted.
    Custom(String),
    /// A random identifier of the given strength, retried until unused.
    Generated(Strength),
}

impl RequestedIdentifier {
    /// Builds a request from an optional custom id and a strength.
    ///
    /// A missing or blank custom id means a generated identifier; the custom
    /// id is trimmed otherwise and the strength is ignored.
    pub fn from_parts(custom_id: Option<&str>, strength: Strength) -> Self {
        match custom_id.map(str::trim) {
            Some(id) if !id.is_empty() => Self::Custom(id.to_owned()),
            _ => Self::Generated(strength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_verbatim() {
        let code = ShortCode::new_unchecked("MyLink");
        assert_eq!(code.to_string(), "MyLink");
        assert_eq!(code.as_str(), "MyLink");
    }

    #[test]
    fn to_url_joins_base() {
        let code = ShortCode::new_unchecked("abc123");
        assert_eq!(code.to_url("https://lv.example/s"), "https://lv.example/s/abc123");
        assert_eq!(
            code.to_url("https://lv.example/s/"),
            "https://lv.example/s/abc123"
        );
    }

    #[test]
    fn serializes_as_plain_string() {
        let code = ShortCode::new_unchecked("abc");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"abc\"");
    }

    #[test]
    fn secure_is_longer_than_standard() {
        assert!(Strength::Secure.length() > Strength::Standard.length());
    }

    #[test]
    fn requested_identifier_from_parts() {
        assert_eq!(
            RequestedIdentifier::from_parts(Some("  my-link "), Strength::Secure),
            RequestedIdentifier::Custom("my-link".to_string())
        );
        assert_eq!(
            RequestedIdentifier::from_parts(Some("   "), Strength::Secure),
            RequestedIdentifier::Generated(Strength::Secure)
        );
        assert_eq!(
            RequestedIdentifier::from_parts(None, Strength::Standard),
            RequestedIdentifier::Generated(Strength::Standard)
        );
    }
}
