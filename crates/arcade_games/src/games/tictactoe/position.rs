//! Board positions for tic-tac-toe moves.

use super::types::Board;
use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (0-8, row-major).
///
/// Serializes as its board index so snapshots read `[0, 1, 2]` rather
/// than variant names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Position {
    /// Cell 0.
    TopLeft,
    /// Cell 1.
    TopCenter,
    /// Cell 2.
    TopRight,
    /// Cell 3.
    MiddleLeft,
    /// Cell 4, the center.
    Center,
    /// Cell 5.
    MiddleRight,
    /// Cell 6.
    BottomLeft,
    /// Cell 7.
    BottomCenter,
    /// Cell 8.
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The four corners in the order the heuristic AI tries them.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Short lowercase name, e.g. `"top-left"`.
    pub fn label(&self) -> &'static str {
        const LABELS: [&str; 9] = [
            "top-left",
            "top",
            "top-right",
            "left",
            "center",
            "right",
            "bottom-left",
            "bottom",
            "bottom-right",
        ];
        LABELS[self.to_index()]
    }

    /// Board index, 0-8.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Position::to_index`]; `None` past 8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the empty positions of `board` in ascending index order.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL.into_iter().filter(|&pos| board.is_empty(pos)).collect()
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> Self {
        pos.to_index() as u8
    }
}

impl TryFrom<u8> for Position {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Position::from_index(usize::from(value))
            .ok_or_else(|| format!("Position out of bounds: {} (must be 0-8)", value))
    }
}

/// Shows the label with the 1-based cell number used at the console.
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.to_index() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_enum_iter_matches_all() {
        let iterated: Vec<_> = <Position as strum::IntoEnumIterator>::iter().collect();
        assert_eq!(iterated, Position::ALL);
    }

    #[test]
    fn test_valid_moves_filters_occupied() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::O));

        let valid = Position::valid_moves(&board);
        assert_eq!(valid.len(), 7);
        assert!(!valid.contains(&Position::TopLeft));
        assert!(!valid.contains(&Position::Center));
        assert!(valid.contains(&Position::BottomRight));
    }

    #[test]
    fn test_display_uses_console_numbering() {
        assert_eq!(Position::TopLeft.to_string(), "top-left (1)");
        assert_eq!(Position::Center.to_string(), "center (5)");
        assert_eq!(Position::BottomRight.label(), "bottom-right");
    }

    #[test]
    fn test_serializes_as_index() {
        let json = serde_json::to_string(&[Position::TopLeft, Position::BottomRight]).unwrap();
        assert_eq!(json, "[0,8]");
        let back: Position = serde_json::from_str("4").unwrap();
        assert_eq!(back, Position::Center);
        assert!(serde_json::from_str::<Position>("9").is_err());
    }
}
