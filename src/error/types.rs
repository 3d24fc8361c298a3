//! Error types
//!
//! Defines the user-facing gate errors surfaced through the session's
//! error slot.

use std::fmt;

/// Validation and authentication errors shown on the login form.
///
/// These are ordinary view states rather than failures: the session holds
/// at most one of them at a time, and the view renders it as the form's
/// error line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    UsernameTooShort,
    UsernameTooLong,
    PasswordComposition,
    InvalidCredentials,
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::UsernameTooShort => {
                write!(f, "Username must be at least 6 characters long")
            }
            GateError::UsernameTooLong => {
                write!(f, "Username must not exceed 20 characters")
            }
            GateError::PasswordComposition => write!(
                f,
                "Password must include a special character, a number, an uppercase letter, and a lowercase letter."
            ),
            GateError::InvalidCredentials => {
                write!(f, "Invalid credentials, please try again.")
            }
        }
    }
}

impl std::error::Error for GateError {}
