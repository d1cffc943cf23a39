//! Arcade game engines - pure, per-session game state machines.
//!
//! Each game is a plain value type that owns its state and exposes the
//! actions a player can take. Nothing here performs I/O or holds locks;
//! a session layer owns the instances and serializes access to them.
//!
//! # Games
//!
//! - **Tic-Tac-Toe**: two-player or versus an AI (heuristic or minimax), with undo
//! - **Hangman**: word guessing with difficulty-banded words
//! - **Number Guess**: higher/lower guessing over a difficulty-sized range
//! - **Rock-Paper-Scissors**: first to a target number of wins against a random AI
//!
//! # Example
//!
//! ```
//! use arcade_games::{AiDifficulty, GameStatus, Position, TicTacToe, TicTacToePlayer};
//!
//! let mut game = TicTacToe::new(false, AiDifficulty::Easy);
//! for cell in [0, 3, 1, 4, 2] {
//!     game.make_move(cell).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won(TicTacToePlayer::X));
//! assert_eq!(
//!     game.winning_line(),
//!     Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod games;
mod rng;

pub use catalog::GameKind;
pub use rng::GameRng;

// Crate-level exports - Tic-tac-toe
pub use games::tictactoe::{
    AiDifficulty, Board, GameStatus, Move, MoveError, Player as TicTacToePlayer, Position, Square,
    TicTacToe, Turn, ai, rules,
};

// Crate-level exports - Hangman
pub use games::hangman::{GuessError, Hangman, HangmanDifficulty, WORD_POOL};

// Crate-level exports - Number guess
pub use games::number_guess::{Hint, NumberGuess, NumberGuessDifficulty, NumberGuessError};

// Crate-level exports - Rock-paper-scissors
pub use games::rps::{MatchWinner, PlayError, RockPaperScissors, RoundResult, Throw};
