//! Moves and move outcomes for tic-tac-toe.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// One mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Where the mark went.
    pub position: Position,
    /// Whose mark it is.
    pub player: Player,
}

impl Move {
    /// Marks `position` for `player`.
    pub fn new(player: Player, position: Position) -> Self {
        Self { position, player }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on {}", self.player, self.position)
    }
}

/// What an accepted `make_move` did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Turn {
    /// The move the caller asked for.
    pub played: Move,
    /// The AI's answer, when the game is against the AI and still open.
    pub reply: Option<Move>,
}

/// Why a move or undo was rejected. The game is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not a board cell.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// Someone already marked that cell.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has a winner or is drawn.
    #[display("Game is already over")]
    GameOver,

    /// There is no move to take back.
    #[display("No moves to undo")]
    NothingToUndo,
}

impl std::error::Error for MoveError {}
