//! Error handling
//!
//! Defines error types for the login gate.

pub mod types;

pub use types::*;
