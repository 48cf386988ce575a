use linkvault_core::{ShortCode, ValidationError};

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 50;

/// Words that collide with routes of the serving layer.
pub const RESERVED: &[&str] = &["api", "admin", "health", "static", "assets", "js", "css"];

/// Checks a caller-supplied identifier.
///
/// Valid identifiers are 3-50 bytes of `[A-Za-z0-9_-]` and are not a reserved
/// word. Only the reserved-word check ignores case.
pub fn validate_custom(id: &str) -> Result<(), ValidationError> {
    let len = id.len();
    if len < MIN_LENGTH {
        return Err(ValidationError::TooShort {
            len,
            min: MIN_LENGTH,
        });
    }
    if len > MAX_LENGTH {
        return Err(ValidationError::TooLong {
            len,
            max: MAX_LENGTH,
        });
    }

    if let Some(found) = id
        .chars()
        .find(|&c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
    {
        return Err(ValidationError::InvalidCharacter { found });
    }

    let lower = id.to_ascii_lowercase();
    if RESERVED.contains(&lower.as_str()) {
        return Err(ValidationError::Reserved(id.to_owned()));
    }

    Ok(())
}

/// Validates `id` and wraps it as a [`ShortCode`], preserving its case.
pub fn custom_code(id: &str) -> Result<ShortCode, ValidationError> {
    validate_custom(id)?;
    Ok(ShortCode::new_unchecked(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ids() {
        assert!(validate_custom("my-link").is_ok());
        assert!(validate_custom("user_123").is_ok());
        assert!(validate_custom("MyLink").is_ok());
        assert!(validate_custom("abc").is_ok());
        assert!(validate_custom(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn too_short() {
        assert_eq!(
            validate_custom("ab"),
            Err(ValidationError::TooShort { len: 2, min: 3 })
        );
        assert!(matches!(
            validate_custom(""),
            Err(ValidationError::TooShort { len: 0, .. })
        ));
    }

    #[test]
    fn too_long() {
        assert_eq!(
            validate_custom(&"a".repeat(51)),
            Err(ValidationError::TooLong { len: 51, max: 50 })
        );
    }

    #[test]
    fn invalid_characters() {
        assert_eq!(
            validate_custom("my link"),
            Err(ValidationError::InvalidCharacter { found: ' ' })
        );
        assert_eq!(
            validate_custom("my@link"),
            Err(ValidationError::InvalidCharacter { found: '@' })
        );
        assert!(matches!(
            validate_custom("abc/def"),
            Err(ValidationError::InvalidCharacter { found: '/' })
        ));
        assert!(matches!(
            validate_custom("café"),
            Err(ValidationError::InvalidCharacter { found: 'é' })
        ));
    }

    #[test]
    fn reserved_words() {
        assert_eq!(
            validate_custom("admin"),
            Err(ValidationError::Reserved("admin".to_string()))
        );
        assert!(matches!(
            validate_custom("api"),
            Err(ValidationError::Reserved(_))
        ));
        for &word in RESERVED.iter().filter(|w| w.len() >= MIN_LENGTH) {
            assert!(
                matches!(validate_custom(word), Err(ValidationError::Reserved(_))),
                "'{word}' should be reserved"
            );
        }
    }

    #[test]
    fn reserved_check_ignores_case() {
        assert!(matches!(
            validate_custom("ADMIN"),
            Err(ValidationError::Reserved(_))
        ));
        assert!(matches!(
            validate_custom("Health"),
            Err(ValidationError::Reserved(_))
        ));
        // Reserved words only match whole ids.
        assert!(validate_custom("admins").is_ok());
    }

    #[test]
    fn two_letter_reserved_words_fail_on_length_first() {
        assert!(matches!(
            validate_custom("js"),
            Err(ValidationError::TooShort { .. })
        ));
    }

    #[test]
    fn custom_code_preserves_case() {
        let code = custom_code("MyLink").unwrap();
        assert_eq!(code.as_str(), "MyLink");
    }
}
