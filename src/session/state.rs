//! Module `session`
//!
//! Defines the `Session` struct and associated methods to manage the login
//! gate's state, including field values, the single error slot, and the
//! authentication flag.

use crate::auth::credentials::{CredentialVerifier, StaticCredentials};
use crate::auth::rules::{validate_password, validate_username};
use crate::error::GateError;

/// Represents the state of one login attempt sequence.
///
/// Tracks the two form fields, the error derived from the most recent
/// event, and whether the gate has been passed. A session starts anonymous
/// and empty; once authenticated it stays authenticated, and a fresh
/// `Session` is the only way back to the login state.
pub struct Session {
    username: String,
    password: String,
    authenticated: bool,
    error: Option<GateError>,
    verifier: Box<dyn CredentialVerifier>,
}

impl Session {
    /// Creates an anonymous session backed by the built-in account table.
    pub fn new() -> Self {
        Self::with_verifier(Box::new(StaticCredentials))
    }

    /// Creates an anonymous session backed by the given verifier.
    pub fn with_verifier(verifier: Box<dyn CredentialVerifier>) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            authenticated: false,
            error: None,
            verifier,
        }
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Returns the current username field value.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the current password field value.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Live character count of the username, as shown by the form counter.
    pub fn username_length(&self) -> usize {
        self.username.chars().count()
    }

    /// Returns the error derived from the most recent event, if any.
    pub fn error(&self) -> Option<GateError> {
        self.error
    }

    /// Current error text, or the empty string when the slot is clear.
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }

    /// Returns whether the session has passed the gate.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    // --------------------
    // Mutators
    // --------------------

    /// Replaces the username and re-derives the error slot from the
    /// username rule alone.
    ///
    /// The slot is overwritten unconditionally: an error raised by the
    /// password rule before this edit is cleared even though the password
    /// was not revalidated. The slot always speaks for whichever field
    /// changed last.
    pub fn set_username(&mut self, value: &str) {
        self.username = value.to_string();
        self.error = validate_username(&self.username).err();
    }

    /// Replaces the password and re-derives the error slot from the
    /// password rule alone. Symmetric to [`Session::set_username`].
    pub fn set_password(&mut self, value: &str) {
        self.password = value.to_string();
        self.error = validate_password(&self.password).err();
    }

    /// Runs the gate over the current field values.
    ///
    /// On a match the session becomes authenticated and the error slot is
    /// cleared. On a mismatch it stays anonymous and the slot is
    /// overwritten with the credential error. The authenticated state is
    /// terminal, so further submits are no-ops.
    pub fn submit(&mut self) {
        if self.authenticated {
            return;
        }

        if self.verifier.verify(&self.username, &self.password) {
            self.authenticated = true;
            self.error = None;
        } else {
            self.authenticated = false;
            self.error = Some(GateError::InvalidCredentials);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RejectAll;

    impl CredentialVerifier for RejectAll {
        fn verify(&self, _username: &str, _password: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_starts_anonymous_and_empty() {
        let session = Session::new();
        assert_eq!(session.username(), "");
        assert_eq!(session.password(), "");
        assert_eq!(session.error(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_username_edit_derives_error() {
        let mut session = Session::new();

        session.set_username("abc");
        assert_eq!(session.error(), Some(GateError::UsernameTooShort));
        assert_eq!(
            session.error_message(),
            "Username must be at least 6 characters long"
        );

        session.set_username("abcdef");
        assert_eq!(session.error(), None);
        assert_eq!(session.error_message(), "");

        session.set_username(&"x".repeat(25));
        assert_eq!(session.error(), Some(GateError::UsernameTooLong));
    }

    #[test]
    fn test_password_edit_derives_error() {
        let mut session = Session::new();

        session.set_password("abc");
        assert_eq!(session.error(), Some(GateError::PasswordComposition));
        assert_eq!(
            session.error_message(),
            "Password must include a special character, a number, an uppercase letter, and a lowercase letter."
        );

        session.set_password("Abcdef1!");
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_username_edit_clears_password_error() {
        let mut session = Session::new();

        session.set_password("weak");
        assert_eq!(session.error(), Some(GateError::PasswordComposition));

        // The username rule overwrites the slot even though the password
        // is still weak.
        session.set_username("longenough");
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_password_edit_clears_username_error() {
        let mut session = Session::new();

        session.set_username("abc");
        assert_eq!(session.error(), Some(GateError::UsernameTooShort));

        session.set_password("Abcdef1!");
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_field_edit_replaces_submit_error() {
        let mut session = Session::new();

        session.submit();
        assert_eq!(session.error(), Some(GateError::InvalidCredentials));

        session.set_username("testuser");
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_submit_with_valid_credentials() {
        let mut session = Session::new();
        session.set_username("testuser");
        session.set_password("Testpass1!");

        session.submit();
        assert!(session.is_authenticated());
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_submit_with_invalid_credentials() {
        let mut session = Session::new();
        session.set_username("testuser");
        session.set_password("wrongpass");

        session.submit();
        assert!(!session.is_authenticated());
        assert_eq!(session.error(), Some(GateError::InvalidCredentials));
        assert_eq!(
            session.error_message(),
            "Invalid credentials, please try again."
        );
    }

    #[test]
    fn test_submit_is_exact_match() {
        let mut session = Session::new();
        session.set_username("Testuser");
        session.set_password("Testpass1!");

        session.submit();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_repeated_submit_stays_authenticated() {
        let mut session = Session::new();
        session.set_username("testuser");
        session.set_password("Testpass1!");

        session.submit();
        session.submit();
        assert!(session.is_authenticated());
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_authenticated_is_terminal() {
        let mut session = Session::new();
        session.set_username("testuser");
        session.set_password("Testpass1!");
        session.submit();
        assert!(session.is_authenticated());

        // No event takes the flag back down.
        session.set_password("different");
        session.submit();
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_injected_verifier_drives_the_gate() {
        let mut session = Session::with_verifier(Box::new(RejectAll));
        session.set_username("testuser");
        session.set_password("Testpass1!");

        session.submit();
        assert!(!session.is_authenticated());
        assert_eq!(session.error(), Some(GateError::InvalidCredentials));
    }

    #[test]
    fn test_username_length_counts_characters() {
        let mut session = Session::new();
        session.set_username("été");
        assert_eq!(session.username_length(), 3);
    }
}
