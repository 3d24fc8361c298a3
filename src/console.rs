//! Console view
//!
//! Runs the interactive login loop using the Tokio async runtime.
//!
//! - Uses BufReader to read input lines one at a time.
//! - Dispatches commands using `handle_command`.
//! - Prints the rendered form or welcome screen after every event.
//!
//! Events reach the session strictly one at a time; the session itself
//! never blocks or sees concurrent mutation.

use log::{debug, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::GateConfig;
use crate::protocol::{CommandStatus, handle_command, parse_command, responses};
use crate::session::Session;

/// Drives a session over stdin until the user quits or logs in.
///
/// The authenticated state is terminal, so the loop ends after rendering
/// the welcome screen; a new run of the binary is the only way back to the
/// login form.
pub async fn run(mut session: Session, config: &GateConfig) -> std::io::Result<()> {
    let stdin = tokio::io::stdin();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    print!("{}", responses::render_form(&session, config));
    println!("{}", responses::usage().trim_end());

    loop {
        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => {
                // Input closed
                info!("End of input, shutting down");
                break;
            }
            Ok(_) => {
                // Enforce input length limit
                if line.len() > config.max_command_length {
                    warn!(
                        "Rejected input line over {} bytes",
                        config.max_command_length
                    );
                    println!("Input too long");
                    continue;
                }

                let command = parse_command(line.trim_end_matches(['\r', '\n']));
                debug!("Received command: {}", command.name());

                let result = handle_command(&mut session, &command, config);

                if let CommandStatus::Failure(reason) = &result.status {
                    debug!("Command {} failed: {}", command.name(), reason);
                }

                if let Some(message) = &result.message {
                    print!("{}", message);
                }

                if result.status == CommandStatus::Exit {
                    break;
                }

                // Authenticated is terminal: the welcome screen has been
                // rendered and no further event can change the state.
                if session.is_authenticated() {
                    break;
                }
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
