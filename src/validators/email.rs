use std::sync::LazyLock;

use regex::Regex;

use super::ValidationError;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Validates a login email before it reaches the credential store.
///
/// # Errors
///
/// Returns a `ValidationError` variant naming the first failed check:
/// empty, longer than 254 bytes, or not matching the address pattern.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailEmpty);
    }

    if email.len() > 254 {
        return Err(ValidationError::EmailTooLong);
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::EmailInvalidFormat);
    }

    Ok(())
}
