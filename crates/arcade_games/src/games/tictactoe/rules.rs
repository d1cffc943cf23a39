//! Win and draw detection for tic-tac-toe.
//!
//! Rules are pure functions over a [`Board`], shared by the engine and the
//! AI search so both agree on what ends a game.

use super::{Board, GameStatus, Player, Position, Square};

/// The eight winning triples in fixed order: rows, columns, diagonals.
///
/// When several lines are complete the first one in this order is the one
/// reported, so the reported line is reproducible.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first complete line and its owner, if any.
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Returns the winner, if any.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

/// True if `player` owns a complete line.
pub fn is_winning(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Classifies the board: a win takes precedence over a full board.
pub fn status(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some(player) => GameStatus::Won(player),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
