//! Rock-paper-scissors against a random AI, first to `target` wins.

use crate::rng::GameRng;
use serde::Serialize;
use strum::EnumString;
use tracing::{debug, info, instrument, warn};

/// Wins needed when no positive target is given.
pub const DEFAULT_TARGET: u32 = 3;

/// A hand shape.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Throw {
    /// Beats scissors.
    #[display("rock")]
    Rock,
    /// Beats rock.
    #[display("paper")]
    Paper,
    /// Beats paper.
    #[display("scissors")]
    Scissors,
}

impl Throw {
    /// Every throw, in listing order.
    pub const ALL: [Throw; 3] = [Throw::Rock, Throw::Paper, Throw::Scissors];

    /// The throw this one beats.
    pub fn beats(self) -> Throw {
        match self {
            Throw::Rock => Throw::Scissors,
            Throw::Paper => Throw::Rock,
            Throw::Scissors => Throw::Paper,
        }
    }

    /// Result of `self` played against `other`, from `self`'s side.
    pub fn against(self, other: Throw) -> RoundResult {
        if self == other {
            RoundResult::Draw
        } else if self.beats() == other {
            RoundResult::Win
        } else {
            RoundResult::Lose
        }
    }
}

/// Outcome of one round, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum RoundResult {
    /// The player won the round.
    #[display("win")]
    Win,
    /// The AI won the round.
    #[display("lose")]
    Lose,
    /// Same throw.
    #[display("draw")]
    Draw,
}

/// Who took the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum MatchWinner {
    /// The human player.
    #[display("player")]
    Player,
    /// The computer.
    #[display("ai")]
    Ai,
}

/// Why a round was not played. The match is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// A side already reached the target.
    #[display("Match is already finished")]
    Finished,

    /// The input is not rock, paper or scissors.
    #[display("Unknown move '{}'", _0)]
    UnknownThrow(String),
}

impl std::error::Error for PlayError {}

/// A rock-paper-scissors match.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RockPaperScissors {
    player_score: u32,
    #[serde(rename = "aiScore")]
    ai_score: u32,
    #[serde(rename = "rounds")]
    rounds_played: u32,
    target: u32,
    #[serde(rename = "lastPlayer")]
    last_player_move: Option<Throw>,
    #[serde(rename = "lastAI")]
    last_ai_move: Option<Throw>,
    last_result: Option<RoundResult>,
    finished: bool,
    winner: Option<MatchWinner>,
    #[serde(skip)]
    rng: GameRng,
}

impl RockPaperScissors {
    /// Starts a match to `target` wins; a target of zero or less means 3.
    ///
    /// Targets beyond `u32::MAX` saturate.
    #[instrument(skip(rng), fields(seed = rng.seed()))]
    pub fn new(target: i64, rng: GameRng) -> Self {
        let target = if target <= 0 {
            DEFAULT_TARGET
        } else {
            u32::try_from(target).unwrap_or(u32::MAX)
        };
        info!(target, "Created rock-paper-scissors match");
        Self {
            player_score: 0,
            ai_score: 0,
            rounds_played: 0,
            target,
            last_player_move: None,
            last_ai_move: None,
            last_result: None,
            finished: false,
            winner: None,
            rng,
        }
    }

    /// Returns the player's round wins.
    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    /// Returns the AI's round wins.
    pub fn ai_score(&self) -> u32 {
        self.ai_score
    }

    /// Returns the number of rounds played, draws included.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the wins needed to take the match.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Returns the player's last throw.
    pub fn last_player_move(&self) -> Option<Throw> {
        self.last_player_move
    }

    /// Returns the AI's last throw.
    pub fn last_ai_move(&self) -> Option<Throw> {
        self.last_ai_move
    }

    /// Returns the last round's result.
    pub fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }

    /// True once either side reached the target.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Returns the match winner once finished.
    pub fn winner(&self) -> Option<MatchWinner> {
        self.winner
    }

    /// Plays one round with the throw named by `input`.
    ///
    /// # Errors
    ///
    /// Rejects rounds after the match ends and unknown throws.
    #[instrument(skip(self), fields(rounds = self.rounds_played))]
    pub fn play(&mut self, input: &str) -> Result<RoundResult, PlayError> {
        if self.finished {
            warn!("Round after match finished");
            return Err(PlayError::Finished);
        }
        let player: Throw = input.trim().parse().map_err(|_| {
            warn!(input, "Unknown throw");
            PlayError::UnknownThrow(input.to_string())
        })?;
        // ALL is never empty.
        let ai = self.rng.choose(&Throw::ALL).copied().unwrap_or(Throw::Rock);

        self.last_player_move = Some(player);
        self.last_ai_move = Some(ai);
        self.rounds_played += 1;

        let result = player.against(ai);
        match result {
            RoundResult::Win => self.player_score += 1,
            RoundResult::Lose => self.ai_score += 1,
            RoundResult::Draw => {}
        }
        self.last_result = Some(result);

        if self.player_score >= self.target || self.ai_score >= self.target {
            self.finished = true;
            self.winner = match self.player_score.cmp(&self.ai_score) {
                std::cmp::Ordering::Greater => Some(MatchWinner::Player),
                std::cmp::Ordering::Less => Some(MatchWinner::Ai),
                std::cmp::Ordering::Equal => None,
            };
            info!(winner = ?self.winner, rounds = self.rounds_played, "Match finished");
        }

        debug!(%player, %ai, %result, "Round played");
        Ok(result)
    }

    /// Clears scores and round state, keeping the target.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.player_score = 0;
        self.ai_score = 0;
        self.rounds_played = 0;
        self.last_player_move = None;
        self.last_ai_move = None;
        self.last_result = None;
        self.finished = false;
        self.winner = None;
        info!(target = self.target, "Reset rock-paper-scissors match");
    }
}
