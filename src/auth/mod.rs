//! Authentication system
//!
//! Handles the login form's field validation rules and the credential
//! verification behind the session gate.

pub mod credentials;
pub mod rules;

pub use credentials::{CredentialVerifier, StaticCredentials};
pub use rules::{validate_password, validate_username};
