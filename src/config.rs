//! Configuration
//!
//! View-level settings loaded from an optional `config.toml` with
//! environment overrides. The gate's account and the field validation
//! bounds are fixed in code and have no configuration surface.

use config::{Config, Environment, File};
use log::warn;
use serde::Deserialize;

/// Console view configuration.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GateConfig {
    /// Heading shown above the login form
    pub banner: String,

    /// First line of the authenticated view
    pub welcome_message: String,

    /// Whether the live username character counter renders
    pub show_username_counter: bool,

    /// Longest input line the console accepts, in bytes
    pub max_command_length: usize,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            banner: "Login".to_string(),
            welcome_message: "Welcome!".to_string(),
            show_username_counter: true,
            max_command_length: 512,
        }
    }
}

impl GateConfig {
    /// Load configuration from config.toml with environment overrides.
    ///
    /// Both sources are optional; a missing file or an invalid value falls
    /// back to the defaults rather than aborting the gate.
    pub fn load() -> Self {
        let loaded = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("LOGIN_GATE"))
            .build()
            .and_then(|settings| settings.try_deserialize::<GateConfig>());

        match loaded {
            Ok(config) => match config.validate() {
                Ok(()) => config,
                Err(e) => {
                    warn!("Ignoring invalid configuration: {}", e);
                    GateConfig::default()
                }
            },
            Err(e) => {
                warn!("Falling back to default configuration: {}", e);
                GateConfig::default()
            }
        }
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.banner.is_empty() {
            return Err(config::ConfigError::Message("banner cannot be empty".into()));
        }

        if self.welcome_message.is_empty() {
            return Err(config::ConfigError::Message(
                "welcome_message cannot be empty".into(),
            ));
        }

        if self.max_command_length == 0 {
            return Err(config::ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
