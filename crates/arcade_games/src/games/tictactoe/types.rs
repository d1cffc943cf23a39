//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A mark, and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Moves first.
    X,
    /// Moves second; the computer in single-player games.
    O,
}

impl Player {
    /// The other mark.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// One cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Marked by a player.
    Occupied(Player),
}

/// The 3x3 grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Row-major, index 0-8.
    squares: [Square; 9],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from a row-major picture such as `"XO_ _X_ __O"`.
    ///
    /// `X` and `O` place marks; any other non-whitespace character is an
    /// empty cell. Returns `None` unless exactly nine cells are given.
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        let cells: Vec<Square> = pattern
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                _ => Square::Empty,
            })
            .collect();
        let squares: [Square; 9] = cells.try_into().ok()?;
        Some(Self { squares })
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Overwrites one square.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// True if nobody has marked `pos`.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Renders the board as three rows, empty cells showing their 1-based
    /// cell number.
    pub fn display(&self) -> String {
        let rows: Vec<String> = self
            .squares
            .chunks(3)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, square)| match square {
                        Square::Empty => (row * 3 + col + 1).to_string(),
                        Square::Occupied(player) => player.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n-+-+-\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a game stands.
///
/// Serializes as the snapshot's `winner`: `null` while in progress, the
/// winning mark (`"X"`/`"O"`), or `"draw"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Someone completed a line.
    Won(Player),
    /// Full board, no line.
    Draw,
}

impl GameStatus {
    /// True once the game has a winner or is drawn.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

impl Serialize for GameStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GameStatus::InProgress => serializer.serialize_none(),
            GameStatus::Won(player) => player.serialize(serializer),
            GameStatus::Draw => serializer.serialize_str("draw"),
        }
    }
}

impl<'de> Deserialize<'de> for GameStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)?.as_deref() {
            None => Ok(GameStatus::InProgress),
            Some("X") => Ok(GameStatus::Won(Player::X)),
            Some("O") => Ok(GameStatus::Won(Player::O)),
            Some("draw") => Ok(GameStatus::Draw),
            Some(other) => Err(serde::de::Error::unknown_variant(other, &["X", "O", "draw"])),
        }
    }
}
