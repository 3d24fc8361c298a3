//! Login Gate - Entry Point
//!
//! An interactive console login gate with live field validation.

use env_logger;
use log::{error, info};

use login_gate::Session;
use login_gate::config::GateConfig;
use login_gate::console;

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching login gate...");

    let config = GateConfig::load();
    let session = Session::new();

    if let Err(e) = console::run(session, &config).await {
        error!("Console I/O error: {}", e);
    }
}
