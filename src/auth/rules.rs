//! Field validation rules
//!
//! Implements the live validation applied to the login form fields. Both
//! rules are pure functions over a single field value, and both treat an
//! empty field as not-yet-filled rather than invalid.

use crate::error::GateError;

/// Shortest username the form accepts.
pub const USERNAME_MIN_LENGTH: usize = 6;

/// Longest username the form accepts.
pub const USERNAME_MAX_LENGTH: usize = 20;

/// Punctuation accepted as the special-character class in passwords.
pub const SPECIAL_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ',', '.', '?', '"', ':', '{', '}', '|', '<',
    '>',
];

/// Validates the username length against the accepted window.
///
/// Length is counted in characters, matching the counter the view shows.
pub fn validate_username(username: &str) -> Result<(), GateError> {
    if username.is_empty() {
        return Ok(());
    }

    let length = username.chars().count();
    if length < USERNAME_MIN_LENGTH {
        return Err(GateError::UsernameTooShort);
    }
    if length > USERNAME_MAX_LENGTH {
        return Err(GateError::UsernameTooLong);
    }

    Ok(())
}

/// Validates that a non-empty password carries all four character classes:
/// a special symbol, a digit, an uppercase letter, and a lowercase letter.
pub fn validate_password(password: &str) -> Result<(), GateError> {
    if password.is_empty() {
        return Ok(());
    }

    let has_special = password.contains(SPECIAL_CHARS);
    let has_digit = password.contains(|c: char| c.is_ascii_digit());
    let has_upper = password.contains(|c: char| c.is_ascii_uppercase());
    let has_lower = password.contains(|c: char| c.is_ascii_lowercase());

    if has_special && has_digit && has_upper && has_lower {
        Ok(())
    } else {
        Err(GateError::PasswordComposition)
    }
}
