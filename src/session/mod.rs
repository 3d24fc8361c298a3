//! Session management
//!
//! Owns the login session state machine: anonymous until the gate is
//! passed, authenticated and terminal afterwards.

pub mod state;

pub use state::Session;
