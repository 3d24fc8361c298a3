//! Console protocol
//!
//! Handles command parsing, dispatch into the session, and response
//! rendering for the view.

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod responses;

pub use commands::{Command, CommandResult, CommandStatus};
pub use handlers::handle_command;
pub use parser::parse_command;
