//! Play configuration loaded from TOML.

use clap::ValueEnum;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_minimax::Mark;
use tracing::{debug, info, instrument};

/// Which mark the human plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HumanSide {
    /// Play X and move first.
    #[default]
    X,
    /// Play O and move second.
    O,
}

impl From<HumanSide> for Mark {
    fn from(side: HumanSide) -> Self {
        match side {
            HumanSide::X => Mark::X,
            HumanSide::O => Mark::O,
        }
    }
}

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    /// Mark played by the human.
    human_mark: HumanSide,

    /// Search the engine's root moves in parallel.
    parallel: bool,

    /// Print the engine's recommended move before each human turn.
    show_hints: bool,
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human_mark = ?config.human_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides; flags only ever switch options on.
    pub fn with_overrides(mut self, human: Option<HumanSide>, parallel: bool, hints: bool) -> Self {
        if let Some(side) = human {
            self.human_mark = side;
        }
        self.parallel |= parallel;
        self.show_hints |= hints;
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
