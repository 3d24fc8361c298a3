//! Console line parsing
//!
//! Parses raw input lines into `Command` values.

use crate::protocol::commands::Command;

/// Parses a raw console line into a `Command`.
///
/// The command word is case-insensitive. Everything after the first run of
/// whitespace is the argument with outer whitespace trimmed; USER and PASS
/// without an argument set their field to the empty string, which is how a
/// field gets cleared.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "QUIT" | "Q" => Command::Quit,
        "SHOW" => Command::Show,
        "LOGIN" | "SUBMIT" => Command::Login,
        "USER" => Command::User(arg.to_string()),
        "PASS" => Command::Pass(arg.to_string()),
        _ => Command::Unknown(trimmed.to_string()),
    }
}
