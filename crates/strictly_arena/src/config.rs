//! Arena configuration loaded from TOML.

use crate::players::PlayerKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file read when none is named explicitly.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_arena.toml";

/// Who plays, and how often.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Strategy for White.
    #[serde(default = "default_white")]
    white: PlayerKind,

    /// Strategy for Black.
    #[serde(default = "default_black")]
    black: PlayerKind,

    /// Seed for the random players; fresh entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Number of games in a tournament.
    #[serde(default = "default_games")]
    games: u32,
}

fn default_white() -> PlayerKind {
    PlayerKind::Random
}

fn default_black() -> PlayerKind {
    PlayerKind::Search
}

fn default_games() -> u32 {
    1
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            white: default_white(),
            black: default_black(),
            seed: None,
            games: default_games(),
        }
    }
}

impl ArenaConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        info!(white = %config.white, black = %config.black, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if present, else defaults.
    #[instrument]
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Rejects settings no arena can run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Replaces file values with any flags given on the command line.
    pub fn with_overrides(
        mut self,
        white: Option<PlayerKind>,
        black: Option<PlayerKind>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(white) = white {
            self.white = white;
        }
        if let Some(black) = black {
            self.black = black;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Overrides the tournament length.
    pub fn with_games(mut self, games: Option<u32>) -> Self {
        if let Some(games) = games {
            self.games = games;
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pit_random_against_search() {
        let config = ArenaConfig::default();
        assert_eq!(*config.white(), PlayerKind::Random);
        assert_eq!(*config.black(), PlayerKind::Search);
        assert_eq!(*config.seed(), None);
        assert_eq!(*config.games(), 1);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: ArenaConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config, ArenaConfig::default());
    }

    #[test]
    fn test_overrides_only_replace_given_values() {
        let config = ArenaConfig::default().with_overrides(None, Some(PlayerKind::First), Some(5));
        assert_eq!(*config.white(), PlayerKind::Random);
        assert_eq!(*config.black(), PlayerKind::First);
        assert_eq!(*config.seed(), Some(5));
    }

    #[test]
    fn test_zero_games_override_fails_validation() {
        let config = ArenaConfig::default().with_games(Some(0));
        let err = config.validate().expect_err("zero games");
        assert!(err.message.contains("at least 1"));
        assert!(ArenaConfig::default().with_games(Some(2)).validate().is_ok());
    }

    #[test]
    fn test_error_records_caller() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
