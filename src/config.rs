//! User interface configuration.

use crate::games::tictactoe::Direction;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the move list newest first when the session starts.
    #[serde(default)]
    start_reversed: bool,

    /// File receiving log output while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Show `(col, row)` hints on empty cells.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_rewind.log")
}

fn default_show_coordinates() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_reversed: false,
            log_file: default_log_file(),
            show_coordinates: default_show_coordinates(),
        }
    }
}

impl UiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the file if given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the starting direction.
    pub fn with_start_reversed(mut self, start_reversed: bool) -> Self {
        self.start_reversed = start_reversed;
        self
    }

    /// Overrides the log file.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// History direction for new sessions.
    pub fn direction(&self) -> Direction {
        if self.start_reversed {
            Direction::Reversed
        } else {
            Direction::Forward
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(UiConfig::from_toml("").unwrap(), UiConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = UiConfig::from_toml("start_reversed = true").unwrap();
        assert!(*config.start_reversed());
        assert!(*config.show_coordinates());
        assert_eq!(config.direction(), Direction::Reversed);
    }

    #[test]
    fn test_bad_toml_reports_error() {
        let err = UiConfig::from_toml("start_reversed = \"maybe\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
