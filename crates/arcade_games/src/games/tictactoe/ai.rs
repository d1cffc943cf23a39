//! Computer opponents for tic-tac-toe.
//!
//! Both strategies are deterministic: for a given board they always pick
//! the same cell. Candidate cells are enumerated in ascending index order
//! and the first best cell wins every tie.

use super::{Board, Player, Position, Square, rules};
use serde::{Deserialize, Serialize};
use strum::EnumString;
use tracing::{debug, instrument};

/// Score of a win reached at depth zero; deeper wins score less.
const WIN_SCORE: i32 = 10;

/// Which strategy the AI plays.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AiDifficulty {
    /// Single-ply heuristic.
    #[default]
    #[display("easy")]
    Easy,
    /// Exhaustive minimax; never loses.
    #[display("optimal")]
    Optimal,
}

impl AiDifficulty {
    /// Parses a difficulty name, falling back to [`AiDifficulty::Easy`].
    pub fn parse_or_default(input: &str) -> Self {
        input.trim().parse().unwrap_or_default()
    }

    /// Picks the AI's move for `ai` on `board` with this strategy.
    pub fn choose(self, board: &Board, ai: Player) -> Option<Position> {
        match self {
            AiDifficulty::Easy => heuristic_move(board, ai),
            AiDifficulty::Optimal => minimax_move(board, ai),
        }
    }
}

/// Would placing `player` at `pos` complete a line?
fn completes_line(board: &mut Board, pos: Position, player: Player) -> bool {
    if !board.is_empty(pos) {
        return false;
    }
    board.set(pos, Square::Occupied(player));
    let won = rules::is_winning(board, player);
    board.set(pos, Square::Empty);
    won
}

/// Heuristic move in fixed priority order.
///
/// 1. a cell that wins immediately for `ai`
/// 2. a cell that blocks the opponent's immediate win
/// 3. the center
/// 4. the first free corner of 0, 2, 6, 8
/// 5. the first free cell
///
/// Returns `None` only when the board is full.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn heuristic_move(board: &Board, ai: Player) -> Option<Position> {
    let mut scratch = board.clone();
    let choice = Position::ALL
        .into_iter()
        .find(|&pos| completes_line(&mut scratch, pos, ai))
        .or_else(|| {
            Position::ALL
                .into_iter()
                .find(|&pos| completes_line(&mut scratch, pos, ai.opponent()))
        })
        .or_else(|| board.is_empty(Position::Center).then_some(Position::Center))
        .or_else(|| Position::CORNERS.into_iter().find(|&pos| board.is_empty(pos)))
        .or_else(|| Position::ALL.into_iter().find(|&pos| board.is_empty(pos)));
    debug!(?choice, "Heuristic AI chose position");
    choice
}

/// Best move for `ai` by full-depth minimax.
///
/// Returns `None` when the board is already decided or full.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn minimax_move(board: &Board, ai: Player) -> Option<Position> {
    if rules::status(board).is_over() {
        return None;
    }

    let mut scratch = board.clone();
    let mut best: Option<(Position, i32)> = None;
    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        scratch.set(pos, Square::Occupied(ai));
        let score = minimax(&mut scratch, ai.opponent(), ai, 1);
        scratch.set(pos, Square::Empty);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    debug!(choice = ?best.map(|(pos, _)| pos), score = ?best.map(|(_, s)| s), "Minimax AI chose position");
    best.map(|(pos, _)| pos)
}

/// Minimax value of `board` with `to_move` on turn, from `ai`'s side.
///
/// `depth` counts plies from the root of the search. A win for `ai` scores
/// `10 - depth`, a loss `depth - 10`, a full board without a line `0`.
/// `ai` maximizes, its opponent minimizes. `board` is restored on return.
pub fn minimax(board: &mut Board, to_move: Player, ai: Player, depth: i32) -> i32 {
    if let Some(winner) = rules::check_winner(board) {
        return if winner == ai {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }
    if board.is_full() {
        return 0;
    }

    let maximizing = to_move == ai;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(to_move));
        let score = minimax(board, to_move.opponent(), ai, depth + 1);
        board.set(pos, Square::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(pattern: &str) -> Board {
        Board::from_pattern(pattern).unwrap()
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(AiDifficulty::parse_or_default("optimal"), AiDifficulty::Optimal);
        assert_eq!(AiDifficulty::parse_or_default("OPTIMAL"), AiDifficulty::Optimal);
        assert_eq!(AiDifficulty::parse_or_default(""), AiDifficulty::Easy);
        assert_eq!(AiDifficulty::parse_or_default("impossible"), AiDifficulty::Easy);
    }

    #[test]
    fn test_heuristic_prefers_win_over_block() {
        // O can finish the top row; X threatens the middle row.
        let b = board("OO_ XX_ __X");
        assert_eq!(heuristic_move(&b, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_heuristic_blocks() {
        let b = board("XX_ _O_ ___");
        assert_eq!(heuristic_move(&b, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_heuristic_takes_center() {
        let b = board("X__ ___ ___");
        assert_eq!(heuristic_move(&b, Player::O), Some(Position::Center));
    }

    #[test]
    fn test_heuristic_corner_order() {
        let b = board("___ _X_ ___");
        assert_eq!(heuristic_move(&b, Player::O), Some(Position::TopLeft));

        let b = board("O__ _X_ __X");
        // X's diagonal is already blocked at 0, so the next free corner is 2.
        assert_eq!(heuristic_move(&b, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_heuristic_falls_back_to_first_free_cell() {
        // No win, no block, center and corners taken.
        let b = board("XOX _X_ OXO");
        assert_eq!(heuristic_move(&b, Player::O), Some(Position::MiddleLeft));
    }

    #[test]
    fn test_heuristic_full_board() {
        assert_eq!(heuristic_move(&board("XOX XOO OXX"), Player::O), None);
    }

    #[test]
    fn test_heuristic_leaves_board_untouched() {
        let b = board("XX_ _O_ ___");
        let before = b.clone();
        let _ = heuristic_move(&b, Player::O);
        assert_eq!(b, before);
    }

    #[test]
    fn test_minimax_takes_immediate_win() {
        // Winning now scores 9; any slower line scores less.
        let b = board("OO_ XX_ __X");
        assert_eq!(minimax_move(&b, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_minimax_answers_corner_with_center() {
        let b = board("X__ ___ ___");
        assert_eq!(minimax_move(&b, Player::O), Some(Position::Center));
    }

    #[test]
    fn test_minimax_tie_break_is_lowest_index() {
        // Every corner draws against a center opening; edges lose.
        let b = board("___ _X_ ___");
        assert_eq!(minimax_move(&b, Player::O), Some(Position::TopLeft));
    }

    #[test]
    fn test_minimax_terminal_scores_are_depth_aware() {
        let mut won = board("OOO XX_ X__");
        assert_eq!(minimax(&mut won, Player::X, Player::O, 3), 7);
        assert_eq!(minimax(&mut won, Player::X, Player::X, 3), -7);

        let mut drawn = board("XOX XOO OXX");
        assert_eq!(minimax(&mut drawn, Player::O, Player::O, 5), 0);
    }

    #[test]
    fn test_minimax_decided_board() {
        assert_eq!(minimax_move(&board("XXX OO_ ___"), Player::O), None);
    }
}
