//! Game engines, one module per game.

pub mod hangman;
pub mod number_guess;
pub mod rps;
pub mod tictactoe;
