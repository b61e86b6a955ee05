//! Game configuration, read from an optional TOML file.

use crate::persistence::{DEFAULT_SAVE_FILE, SavePolicy};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default config file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Board variant. Each one is a separate instantiation of the engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 3x3 board.
    #[default]
    #[display("classic")]
    Classic,
    /// 4x4 board.
    #[display("large")]
    Large,
}

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Board variant.
    #[serde(default)]
    variant: Variant,

    /// Where the game is saved.
    #[serde(default = "default_save_file")]
    save_file: PathBuf,

    /// When a loaded save is emptied.
    #[serde(default)]
    save_policy: SavePolicy,

    /// Whether to colour the board.
    #[serde(default = "default_color")]
    color: bool,
}

#[instrument]
fn default_save_file() -> PathBuf {
    PathBuf::from(DEFAULT_SAVE_FILE)
}

#[instrument]
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            save_file: default_save_file(),
            save_policy: SavePolicy::default(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(variant = %config.variant, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Replaces the save file path.
    pub fn with_save_file(mut self, save_file: impl Into<PathBuf>) -> Self {
        self.save_file = save_file.into();
        self
    }

    /// Replaces the save policy.
    pub fn with_save_policy(mut self, save_policy: SavePolicy) -> Self {
        self.save_policy = save_policy;
        self
    }

    /// Turns board colours on or off.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
