//! Command handlers
//!
//! Dispatches parsed commands into the session and shapes the result the
//! console prints.

use log::info;

use crate::config::GateConfig;
use crate::protocol::commands::{Command, CommandResult, CommandStatus};
use crate::protocol::responses;
use crate::session::Session;

pub fn handle_command(
    session: &mut Session,
    command: &Command,
    config: &GateConfig,
) -> CommandResult {
    match command {
        Command::User(value) => handle_cmd_user(session, value, config),
        Command::Pass(value) => handle_cmd_pass(session, value, config),
        Command::Login => handle_cmd_login(session, config),
        Command::Show => handle_cmd_show(session, config),
        Command::Quit => handle_cmd_quit(),
        Command::Unknown(raw) => handle_cmd_unknown(raw),
    }
}

/// Handles USER: replaces the username and re-renders the form with the
/// freshly derived error state.
fn handle_cmd_user(session: &mut Session, value: &str, config: &GateConfig) -> CommandResult {
    session.set_username(value);
    form_result(session, config)
}

/// Handles PASS: replaces the password and re-renders the form with the
/// freshly derived error state.
fn handle_cmd_pass(session: &mut Session, value: &str, config: &GateConfig) -> CommandResult {
    session.set_password(value);
    form_result(session, config)
}

/// Handles LOGIN: runs the gate, then renders either the welcome screen or
/// the form carrying the credential error.
fn handle_cmd_login(session: &mut Session, config: &GateConfig) -> CommandResult {
    let was_authenticated = session.is_authenticated();
    session.submit();

    if session.is_authenticated() {
        if !was_authenticated {
            info!("User {} successfully logged in", session.username());
        }
        CommandResult {
            status: CommandStatus::Success,
            message: Some(responses::render_welcome(config)),
        }
    } else {
        CommandResult {
            status: CommandStatus::Failure(session.error_message()),
            message: Some(responses::render_form(session, config)),
        }
    }
}

/// Handles SHOW: re-renders the current state without mutating it.
fn handle_cmd_show(session: &Session, config: &GateConfig) -> CommandResult {
    if session.is_authenticated() {
        CommandResult {
            status: CommandStatus::Success,
            message: Some(responses::render_welcome(config)),
        }
    } else {
        form_result(session, config)
    }
}

/// Handles QUIT: signals the console loop to stop.
fn handle_cmd_quit() -> CommandResult {
    CommandResult {
        status: CommandStatus::Exit,
        message: Some("Goodbye\n".into()),
    }
}

fn handle_cmd_unknown(raw: &str) -> CommandResult {
    CommandResult {
        status: CommandStatus::Failure(format!("Unknown command: {raw}")),
        message: Some(responses::usage().into()),
    }
}

fn form_result(session: &Session, config: &GateConfig) -> CommandResult {
    let status = match session.error() {
        Some(error) => CommandStatus::Failure(error.to_string()),
        None => CommandStatus::Success,
    };

    CommandResult {
        status,
        message: Some(responses::render_form(session, config)),
    }
}
