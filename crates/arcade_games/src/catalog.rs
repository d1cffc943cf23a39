//! The games the arcade offers.

use serde::Serialize;
use strum::{EnumIter, EnumString};

/// One kind of game a session can hold.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumString, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameKind {
    /// Tic-tac-toe.
    #[display("Tic Tac Toe")]
    TicTacToe,
    /// Number guess.
    #[display("Number Guess")]
    NumberGuess,
    /// Hangman.
    #[display("Hangman")]
    Hangman,
    /// Rock-paper-scissors.
    #[display("Rock Paper Scissors")]
    Rps,
}

impl GameKind {
    /// Stable identifier, e.g. `"tictactoe"`.
    pub fn id(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "tictactoe",
            GameKind::NumberGuess => "numberguess",
            GameKind::Hangman => "hangman",
            GameKind::Rps => "rps",
        }
    }

    /// Display name, e.g. `"Tic Tac Toe"`.
    pub fn name(self) -> String {
        self.to_string()
    }

    /// Iterates the catalog in listing order.
    pub fn iter() -> impl Iterator<Item = GameKind> {
        <GameKind as strum::IntoEnumIterator>::iter()
    }
}
