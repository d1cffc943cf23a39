//! Tic-tac-toe session engine.
//!
//! One [`TicTacToe`] is one live game. It validates moves, detects the end
//! of the game, plays the AI's reply inline when the game is against the
//! computer, and takes moves back on undo.

use super::action::{Move, MoveError, Turn};
use super::ai::AiDifficulty;
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// The mark the computer plays in single-player games.
const AI_PLAYER: Player = Player::O;

/// A tic-tac-toe game, either two humans or a human (X) against the AI (O).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicTacToe {
    board: Board,
    current_player: Player,
    #[serde(rename = "winner")]
    status: GameStatus,
    winning_line: Option<[Position; 3]>,
    #[serde(rename = "moves")]
    history: Vec<Move>,
    #[serde(rename = "vsAI")]
    vs_ai: bool,
    #[serde(rename = "difficulty")]
    ai_difficulty: AiDifficulty,
}

impl TicTacToe {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new(vs_ai: bool, ai_difficulty: AiDifficulty) -> Self {
        info!("Creating tic-tac-toe game");
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
            history: Vec::new(),
            vs_ai,
            ai_difficulty,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the line that won the game, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    /// Returns the moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True when O is played by the computer.
    pub fn vs_ai(&self) -> bool {
        self.vs_ai
    }

    /// Returns the AI strategy.
    pub fn ai_difficulty(&self) -> AiDifficulty {
        self.ai_difficulty
    }

    /// Plays the current player's mark at `index` (0-8).
    ///
    /// Against the AI, the AI's reply is played before this returns, so the
    /// caller never sees the board with O to move.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range indices, occupied squares and moves after the
    /// game has ended. A rejected move leaves the game untouched.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn make_move(&mut self, index: usize) -> Result<Turn, MoveError> {
        if self.status.is_over() {
            warn!(index, status = ?self.status, "Move after game over");
            return Err(MoveError::GameOver);
        }
        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Move out of bounds");
            MoveError::OutOfBounds(index)
        })?;
        if !self.board.is_empty(position) {
            warn!(%position, "Move on occupied square");
            return Err(MoveError::SquareOccupied(position));
        }

        let played = self.place(position);
        let reply = if self.vs_ai && self.current_player == AI_PLAYER && !self.status.is_over() {
            self.ai_move()
        } else {
            None
        };

        debug!(%played, reply = ?reply, status = ?self.status, "Move applied");
        Ok(Turn { played, reply })
    }

    /// Clears the board and history, keeping the mode and AI strategy.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(vs_ai = self.vs_ai, difficulty = %self.ai_difficulty, "Resetting tic-tac-toe game");
        *self = Self::new(self.vs_ai, self.ai_difficulty);
    }

    /// Takes back the last move and reopens the game.
    ///
    /// Against the AI, taking back the AI's move also takes back the human
    /// move before it, so it is the human's turn again. Returns how many
    /// moves were removed.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NothingToUndo`] when no move has been played.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<usize, MoveError> {
        let last = self.history.pop().ok_or_else(|| {
            warn!("Undo with empty history");
            MoveError::NothingToUndo
        })?;
        self.board.set(last.position, Square::Empty);
        let mut removed = 1;

        if self.vs_ai && last.player == AI_PLAYER {
            if let Some(previous) = self.history.pop() {
                self.board.set(previous.position, Square::Empty);
                removed += 1;
            }
        }

        self.current_player = self
            .history
            .last()
            .map_or(Player::X, |m| m.player.opponent());
        self.status = GameStatus::InProgress;
        self.winning_line = None;

        debug!(removed, current_player = ?self.current_player, "Undo applied");
        Ok(removed)
    }

    /// Places the current player's mark on a known-empty square.
    fn place(&mut self, position: Position) -> Move {
        let mov = Move::new(self.current_player, position);
        self.board.set(position, Square::Occupied(mov.player));
        self.history.push(mov);
        self.update_status();
        if !self.status.is_over() {
            self.current_player = self.current_player.opponent();
        }
        mov
    }

    /// Plays one AI move for the current player.
    fn ai_move(&mut self) -> Option<Move> {
        let position = self.ai_difficulty.choose(&self.board, self.current_player)?;
        Some(self.place(position))
    }

    /// Updates status and winning line after a move.
    fn update_status(&mut self) {
        match rules::winning_line(&self.board) {
            Some((winner, line)) => {
                info!(?winner, ?line, "Game won");
                self.status = GameStatus::Won(winner);
                self.winning_line = Some(line);
            }
            None if self.board.is_full() => {
                info!("Game drawn");
                self.status = GameStatus::Draw;
            }
            None => {}
        }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new(false, AiDifficulty::default())
    }
}
