//! Application configuration.
//!
//! Settings come from an optional TOML file with CLI flags layered on top.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who sits on the O side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans passing the keyboard.
    Local,
    /// A human against the random-move computer.
    Computer,
}

/// Application configuration.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Game mode.
    #[serde(default = "default_mode")]
    mode: GameMode,

    /// How long the computer waits before moving, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Seed for the computer's move sampling. Unseeded when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Display name for the X player.
    #[serde(default = "default_x_name")]
    x_name: String,

    /// Display name for the O player (ignored in computer mode).
    #[serde(default = "default_o_name")]
    o_name: String,
}

fn default_mode() -> GameMode {
    GameMode::Local
}

fn default_think_delay_ms() -> u64 {
    1000
}

fn default_x_name() -> String {
    "Player X".to_string()
}

fn default_o_name() -> String {
    "Player O".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            think_delay_ms: default_think_delay_ms(),
            seed: None,
            x_name: default_x_name(),
            o_name: default_o_name(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = ?config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the effective configuration for this run.
    ///
    /// An explicitly passed path must exist; otherwise `./noughts.toml` is
    /// used when present, and built-in defaults when not. CLI flags win over
    /// file values.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => {
                let fallback = Path::new("noughts.toml");
                if fallback.exists() {
                    Self::from_file(fallback)?
                } else {
                    debug!("No config file, using defaults");
                    Self::default()
                }
            }
        };

        if let Some(mode) = cli.mode {
            config.mode = mode;
        }
        if let Some(delay) = cli.delay_ms {
            config.think_delay_ms = delay;
        }
        if let Some(seed) = cli.seed {
            config.seed = Some(seed);
        }

        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
