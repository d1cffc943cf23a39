//! Batch self-play: a seeded random X against the tic-tac-toe AI.

use crate::session::{SessionError, SessionStore};
use arcade_games::{AiDifficulty, GameRng, GameStatus, Position, TicTacToe, TicTacToePlayer};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Session id used for self-play games.
const SELFPLAY_SESSION: &str = "selfplay";

/// Outcome counts over a batch of self-play games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfplayReport {
    /// Games won by the random X player.
    pub x_wins: u32,
    /// Games won by the AI.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl SelfplayReport {
    /// Total games counted.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(TicTacToePlayer::X) => self.x_wins += 1,
            GameStatus::Won(TicTacToePlayer::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

impl std::fmt::Display for SelfplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X {} / O {} / draw {}",
            self.total(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Plays `games` games of random X against the AI at `difficulty`.
///
/// Every game runs through `store` like a player session would and is
/// removed when the batch ends.
///
/// # Errors
///
/// Returns a session error if the self-play session disappears mid-game.
#[instrument(skip(store, rng), fields(seed = rng.seed()))]
pub fn run_selfplay(
    store: &SessionStore,
    games: u32,
    difficulty: AiDifficulty,
    rng: &mut GameRng,
) -> Result<SelfplayReport, SessionError> {
    info!("Starting self-play batch");
    let mut report = SelfplayReport::default();
    store.insert(SELFPLAY_SESSION, TicTacToe::new(true, difficulty));

    let result: Result<(), SessionError> = (0..games).try_for_each(|game_number| {
        let status = store.with_session(SELFPLAY_SESSION, |game: &mut TicTacToe| {
            game.reset();
            while !game.status().is_over() {
                let moves = Position::valid_moves(game.board());
                let Some(&position) = rng.choose(&moves) else {
                    break;
                };
                // Random play only picks empty squares of an open game.
                if game.make_move(position.to_index()).is_err() {
                    break;
                }
            }
            game.status()
        })?;
        debug!(game_number, ?status, "Self-play game finished");
        report.record(status);
        Ok(())
    });

    store.remove::<TicTacToe>(SELFPLAY_SESSION);
    result?;
    info!(%report, "Self-play batch finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_every_game() {
        let store = SessionStore::new();
        let report = run_selfplay(&store, 25, AiDifficulty::Easy, &mut GameRng::new(5)).unwrap();
        assert_eq!(report.total(), 25);
        assert!(!store.contains::<TicTacToe>(SELFPLAY_SESSION));
    }

    #[test]
    fn test_same_seed_same_report() {
        let store = SessionStore::new();
        let a = run_selfplay(&store, 20, AiDifficulty::Easy, &mut GameRng::new(9)).unwrap();
        let b = run_selfplay(&store, 20, AiDifficulty::Easy, &mut GameRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_games() {
        let store = SessionStore::new();
        let report = run_selfplay(&store, 0, AiDifficulty::Optimal, &mut GameRng::new(1)).unwrap();
        assert_eq!(report, SelfplayReport::default());
        assert_eq!(report.to_string(), "0 games: X 0 / O 0 / draw 0");
    }
}
