//! Number guess: find the secret number with higher/lower hints.

use crate::rng::GameRng;
use serde::Serialize;
use strum::EnumString;
use tracing::{debug, info, instrument, warn};

/// Number guess difficulty: sets the upper bound of the secret.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NumberGuessDifficulty {
    /// 1 to 50.
    #[display("easy")]
    Easy,
    /// 1 to 100.
    #[default]
    #[display("normal")]
    Normal,
    /// 1 to 500.
    #[display("hard")]
    Hard,
    /// 1 to 1000.
    #[display("insane")]
    Insane,
}

impl NumberGuessDifficulty {
    /// Parses a difficulty name, falling back to [`NumberGuessDifficulty::Normal`].
    pub fn parse_or_default(input: &str) -> Self {
        input.trim().parse().unwrap_or_default()
    }

    /// Largest possible secret.
    pub fn max(self) -> u32 {
        match self {
            NumberGuessDifficulty::Easy => 50,
            NumberGuessDifficulty::Normal => 100,
            NumberGuessDifficulty::Hard => 500,
            NumberGuessDifficulty::Insane => 1000,
        }
    }
}

/// Feedback for a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum Hint {
    /// The secret is larger than the guess.
    #[display("higher")]
    Higher,
    /// The secret is smaller than the guess.
    #[display("lower")]
    Lower,
    /// The guess is the secret.
    #[display("correct")]
    Correct,
    /// The guess was outside `1..=max` and did not count.
    #[display("out-of-range")]
    OutOfRange,
}

/// Why a guess was not applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum NumberGuessError {
    /// The secret was already found.
    #[display("Number already guessed")]
    AlreadyWon,
}

impl std::error::Error for NumberGuessError {}

/// A number guessing round.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberGuess {
    #[serde(skip)]
    secret: u32,
    max: u32,
    tries: u32,
    last: Option<u32>,
    hint: Option<Hint>,
    won: bool,
    difficulty: NumberGuessDifficulty,
    #[serde(skip)]
    rng: GameRng,
}

impl NumberGuess {
    /// Starts a round with a uniformly random secret in `1..=max`.
    #[instrument(skip(rng), fields(seed = rng.seed()))]
    pub fn new(difficulty: NumberGuessDifficulty, mut rng: GameRng) -> Self {
        let max = difficulty.max();
        let secret = rng.gen_range_u32(1..=max);
        info!(%difficulty, max, "Created number guess game");
        Self {
            secret,
            max,
            tries: 0,
            last: None,
            hint: None,
            won: false,
            difficulty,
            rng,
        }
    }

    /// Returns the upper bound.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Returns the number of counted guesses.
    pub fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the last counted guess.
    pub fn last(&self) -> Option<u32> {
        self.last
    }

    /// Returns the most recent hint.
    pub fn hint(&self) -> Option<Hint> {
        self.hint
    }

    /// True once the secret was found.
    pub fn won(&self) -> bool {
        self.won
    }

    /// Returns the difficulty.
    pub fn difficulty(&self) -> NumberGuessDifficulty {
        self.difficulty
    }

    /// Reveals the secret. Never part of the snapshot.
    pub fn secret(&self) -> u32 {
        self.secret
    }

    /// Guesses `n`.
    ///
    /// A guess outside `1..=max` only sets the hint to
    /// [`Hint::OutOfRange`]; it is not counted and does not change `last`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberGuessError::AlreadyWon`] once the secret was found.
    #[instrument(skip(self), fields(max = self.max))]
    pub fn guess(&mut self, n: i64) -> Result<Hint, NumberGuessError> {
        if self.won {
            warn!("Guess after round won");
            return Err(NumberGuessError::AlreadyWon);
        }
        let n = match u32::try_from(n) {
            Ok(n) if (1..=self.max).contains(&n) => n,
            _ => {
                debug!("Guess out of range");
                self.hint = Some(Hint::OutOfRange);
                return Ok(Hint::OutOfRange);
            }
        };

        self.tries += 1;
        self.last = Some(n);
        let hint = match n.cmp(&self.secret) {
            std::cmp::Ordering::Equal => {
                self.won = true;
                Hint::Correct
            }
            std::cmp::Ordering::Less => Hint::Higher,
            std::cmp::Ordering::Greater => Hint::Lower,
        };
        self.hint = Some(hint);

        debug!(n, %hint, tries = self.tries, "Guess applied");
        Ok(hint)
    }

    /// Starts a new round with a new secret in the same range.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.secret = self.rng.gen_range_u32(1..=self.max);
        self.tries = 0;
        self.last = None;
        self.hint = None;
        self.won = false;
        info!(difficulty = %self.difficulty, "Reset number guess game");
    }
}
