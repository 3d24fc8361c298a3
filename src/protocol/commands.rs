//! Module `commands`
//!
//! Defines the console commands the view translates into session events,
//! plus the result structures handed back after dispatch.

/// Represents a command parsed from a console input line.
///
/// Field commands carry the full replacement value for their field, the
/// way a form field holds its entire current text after an edit.
#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Show,
    Login,
    User(String),
    Pass(String),
    Unknown(String),
}

impl Command {
    /// Short name for logging. Field values are omitted so passwords never
    /// reach the log.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Quit => "QUIT",
            Command::Show => "SHOW",
            Command::Login => "LOGIN",
            Command::User(_) => "USER",
            Command::Pass(_) => "PASS",
            Command::Unknown(_) => "UNKNOWN",
        }
    }
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Exit,
}

/// Struct encapsulating the full result of a command execution.
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}
