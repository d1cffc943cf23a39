//! Tic-tac-toe: board model, rules, AI strategies and the session engine.

mod action;
pub mod ai;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError, Turn};
pub use ai::AiDifficulty;
pub use game::TicTacToe;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
