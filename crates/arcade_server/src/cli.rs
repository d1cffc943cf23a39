//! Command-line interface for the arcade.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arcade - play tic-tac-toe, hangman, number guess and rock-paper-scissors
#[derive(Parser, Debug)]
#[command(name = "arcade")]
#[command(about = "Console arcade over the game engines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "arcade.toml")]
    pub config: PathBuf,

    /// Seed for every random choice (overrides ARCADE_SEED and the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List the available games as JSON
    List,

    /// Play tic-tac-toe
    #[command(name = "tictactoe")]
    TicTacToe {
        /// Two humans share the console instead of playing the AI
        #[arg(long)]
        two_player: bool,

        /// AI strategy: easy or optimal
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// Play hangman
    Hangman {
        /// Word band: easy, normal or hard
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// Play number guess
    NumberGuess {
        /// Range size: easy, normal, hard or insane
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// Play rock-paper-scissors
    Rps {
        /// Wins needed to take the match
        #[arg(short, long, allow_negative_numbers = true)]
        target: Option<i64>,
    },

    /// Pit a random X against the tic-tac-toe AI and report the results
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// AI strategy: easy or optimal
        #[arg(short, long)]
        difficulty: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["arcade", "hangman", "--seed", "7", "-d", "hard"]).unwrap();
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.config, PathBuf::from("arcade.toml"));
        assert_eq!(
            cli.command,
            Command::Hangman {
                difficulty: Some("hard".to_string())
            }
        );
    }

    #[test]
    fn test_tictactoe_name() {
        let cli = Cli::try_parse_from(["arcade", "tictactoe", "--two-player"]).unwrap();
        assert_eq!(
            cli.command,
            Command::TicTacToe {
                two_player: true,
                difficulty: None
            }
        );
    }

    #[test]
    fn test_selfplay_defaults() {
        let cli = Cli::try_parse_from(["arcade", "selfplay"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Selfplay {
                games: 100,
                difficulty: None
            }
        );
    }

    #[test]
    fn test_rps_negative_target_parses() {
        let cli = Cli::try_parse_from(["arcade", "rps", "--target", "-2"]).unwrap();
        assert_eq!(cli.command, Command::Rps { target: Some(-2) });
    }
}
