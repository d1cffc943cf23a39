//! Arcade configuration loaded from TOML.

use arcade_games::{AiDifficulty, HangmanDifficulty, NumberGuessDifficulty};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Environment variable that overrides the configured seed.
pub const SEED_ENV: &str = "ARCADE_SEED";

/// Defaults for new games.
///
/// Difficulty names are kept as written and normalized when read, so an
/// unknown name falls back to the game's default instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    /// Whether tic-tac-toe is played against the AI.
    tictactoe_vs_ai: bool,

    /// Tic-tac-toe AI strategy name (easy or optimal).
    #[getter(skip)]
    tictactoe_difficulty: String,

    /// Hangman difficulty name (easy, normal or hard).
    #[getter(skip)]
    hangman_difficulty: String,

    /// Number guess difficulty name (easy, normal, hard or insane).
    #[getter(skip)]
    number_guess_difficulty: String,

    /// Rock-paper-scissors wins needed; zero or less means 3.
    rps_target: i64,

    /// Seed for every random choice; entropy when absent.
    seed: Option<u64>,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            tictactoe_vs_ai: true,
            tictactoe_difficulty: AiDifficulty::default().to_string(),
            hangman_difficulty: HangmanDifficulty::default().to_string(),
            number_guess_difficulty: NumberGuessDifficulty::default().to_string(),
            rps_target: 3,
            seed: None,
        }
    }
}

impl ArcadeConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Tic-tac-toe AI strategy.
    pub fn tictactoe_difficulty(&self) -> AiDifficulty {
        AiDifficulty::parse_or_default(&self.tictactoe_difficulty)
    }

    /// Hangman difficulty.
    pub fn hangman_difficulty(&self) -> HangmanDifficulty {
        HangmanDifficulty::parse_or_default(&self.hangman_difficulty)
    }

    /// Number guess difficulty.
    pub fn number_guess_difficulty(&self) -> NumberGuessDifficulty {
        NumberGuessDifficulty::parse_or_default(&self.number_guess_difficulty)
    }

    /// Picks the seed: the command line wins, then the value of
    /// `env_seed` (normally `ARCADE_SEED`), then the file.
    #[instrument(skip(self))]
    pub fn resolve_seed(&self, cli_seed: Option<u64>, env_seed: Option<&str>) -> Option<u64> {
        let from_env = env_seed.and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                warn!(raw, error = %e, "Ignoring unparsable seed from environment");
                None
            }
        });
        cli_seed.or(from_env).or(self.seed)
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
