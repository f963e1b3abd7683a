//! Configuration for the engine and the command-line front end.
//!
//! Every section has defaults, so an empty or partial TOML file is valid:
//!
//! ```
//! use tictactoe_ai::config::Config;
//! use tictactoe_ai::tictactoe::Player;
//!
//! let config = Config::from_toml_str("[play]\nhuman = \"O\"\n")?;
//! assert_eq!(config.play.human, Player::O);
//! assert!(config.engine.pruning);
//! # Ok::<(), tictactoe_ai::Error>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, tictactoe::Player};

/// Search engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Alpha-beta pruning. Turning it off gives plain minimax with the same
    /// moves and scores, only slower.
    pub pruning: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { pruning: true }
    }
}

/// Interactive game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Side played by the human; X always moves first
    pub human: Player,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self { human: Player::X }
    }
}

/// Engine-versus-random evaluation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Number of games to play
    pub games: usize,

    /// Random seed for the opponent
    pub seed: Option<u64>,

    /// Side played by the engine
    pub engine: Player,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            engine: Player::O,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub play: PlayConfig,
    pub evaluate: EvaluationConfig,
}

impl Config {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if the text is not valid TOML or a
    /// field has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::ConfigParse`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Set alpha-beta pruning on or off.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.engine.pruning = pruning;
        self
    }

    /// Set the side the human plays.
    pub fn with_human(mut self, human: Player) -> Self {
        self.play.human = human;
        self
    }

    /// Set the evaluation seed for deterministic runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.evaluate.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.engine.pruning);
        assert_eq!(config.play.human, Player::X);
        assert_eq!(config.evaluate.games, 100);
        assert_eq!(config.evaluate.engine, Player::O);
        assert_eq!(config.evaluate.seed, None);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml_str(
            r#"
            [engine]
            pruning = false

            [evaluate]
            games = 12
            seed = 7
            "#,
        )
        .unwrap();
        assert!(!config.engine.pruning);
        assert_eq!(config.evaluate.games, 12);
        assert_eq!(config.evaluate.seed, Some(7));
        assert_eq!(config.evaluate.engine, Player::O);
        assert_eq!(config.play, PlayConfig::default());
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        let err = Config::from_toml_str("[engine]\npruning = \"yes\"\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_pruning(false)
            .with_human(Player::O)
            .with_seed(42);
        assert!(!config.engine.pruning);
        assert_eq!(config.play.human, Player::O);
        assert_eq!(config.evaluate.seed, Some(42));
    }
}
