use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use linkvault_core::shortcode::{SECURE_LENGTH, STANDARD_LENGTH};
use linkvault_core::ShortCode;
use rand::Rng;

/// Random bytes drawn for a standard identifier.
const STANDARD_ENTROPY_BYTES: usize = 8;
/// Random bytes drawn for a secure identifier.
const SECURE_ENTROPY_BYTES: usize = 16;

/// Generates an 8-character identifier from the base64url alphabet.
///
/// Eight random bytes encode to twelve characters; the first eight are kept,
/// so the result may contain `-` and `_`.
pub fn generate_standard() -> ShortCode {
    let mut bytes = [0u8; STANDARD_ENTROPY_BYTES];
    rand::rng().fill(&mut bytes);

    let mut encoded = URL_SAFE.encode(bytes);
    encoded.truncate(STANDARD_LENGTH);
    ShortCode::new_unchecked(encoded)
}

/// Generates a 16-character identifier that resists enumeration.
///
/// Sixteen random bytes are base64url encoded, padding is dropped and the
/// two symbols `-` and `_` are remapped to `x` and `y` before truncation.
pub fn generate_secure() -> ShortCode {
    let mut bytes = [0u8; SECURE_ENTROPY_BYTES];
    rand::rng().fill(&mut bytes);

    let mut encoded: String = URL_SAFE
        .encode(bytes)
        .chars()
        .filter(|&c| c != '=')
        .map(|c| match c {
            '-' => 'x',
            '_' => 'y',
            other => other,
        })
        .collect();
    // 16 bytes always encode to 22 unpadded characters.
    encoded.truncate(SECURE_LENGTH);
    ShortCode::new_unchecked(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_url_safe(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-' || c == '_'
    }

    #[test]
    fn standard_has_fixed_length_and_safe_alphabet() {
        for _ in 0..200 {
            let code = generate_standard();
            assert_eq!(code.as_str().len(), 8);
            assert!(code.as_str().chars().all(is_url_safe), "{code}");
        }
    }

    #[test]
    fn secure_has_fixed_length_and_no_symbols() {
        for _ in 0..200 {
            let code = generate_secure();
            assert_eq!(code.as_str().len(), 16);
            assert!(
                code.as_str().chars().all(|c| c.is_ascii_alphanumeric()),
                "{code}"
            );
        }
    }

    #[test]
    fn standard_codes_do_not_repeat() {
        let codes: HashSet<_> = (0..1000).map(|_| generate_standard()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn secure_codes_do_not_repeat() {
        let codes: HashSet<_> = (0..1000).map(|_| generate_secure()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn secure_is_longer_than_standard() {
        assert!(generate_secure().as_str().len() > generate_standard().as_str().len());
    }
}
