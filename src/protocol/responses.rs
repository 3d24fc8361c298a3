//! Response rendering
//!
//! Builds the text the console prints back after each event: the login
//! form below the authentication threshold, the welcome screen above it.

use crate::config::GateConfig;
use crate::session::Session;

/// Renders the login form: banner, error line if any, and both fields.
pub fn render_form(session: &Session, config: &GateConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", config.banner));

    if let Some(error) = session.error() {
        out.push_str(&format!("! {}\n", error));
    }

    if config.show_username_counter {
        out.push_str(&format!(
            "Username: {} [{}]\n",
            session.username(),
            session.username_length()
        ));
    } else {
        out.push_str(&format!("Username: {}\n", session.username()));
    }

    out.push_str(&format!("Password: {}\n", mask(session.password())));

    out
}

/// Renders the authenticated view.
pub fn render_welcome(config: &GateConfig) -> String {
    format!("{}\nYou are logged in.\n", config.welcome_message)
}

/// Usage hint printed for unrecognized input.
pub fn usage() -> &'static str {
    "Commands: USER <name>, PASS <password>, LOGIN, SHOW, QUIT\n"
}

/// Masks a password for display, one mark per character.
fn mask(password: &str) -> String {
    "*".repeat(password.chars().count())
}
