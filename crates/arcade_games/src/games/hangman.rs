//! Hangman: guess the secret word one letter at a time.

use crate::rng::GameRng;
use serde::Serialize;
use strum::EnumString;
use tracing::{debug, info, instrument, warn};

/// Placeholder shown for letters not yet guessed.
const HIDDEN: char = '_';

/// The built-in word pool.
pub const WORD_POOL: [&str; 20] = [
    "go", "code", "game", "react", "pixel", "binary", "dragon", "async", "memory", "network",
    "galaxy", "hangman", "puzzle", "random", "frontend", "backend", "context", "pointer",
    "compiler", "optimize",
];

/// Hangman difficulty: picks the word-length band and the mistake budget.
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
pub enum HangmanDifficulty {
    /// Words of at most 5 letters, 8 mistakes allowed.
    #[display("easy")]
    Easy,
    /// Words of 4 to 8 letters, 6 mistakes allowed.
    #[default]
    #[display("normal")]
    Normal,
    /// Words of at least 6 letters, 5 mistakes allowed.
    #[display("hard")]
    Hard,
}

impl HangmanDifficulty {
    /// Parses a difficulty name, falling back to [`HangmanDifficulty::Normal`].
    pub fn parse_or_default(input: &str) -> Self {
        input.trim().parse().unwrap_or_default()
    }

    /// Wrong guesses allowed before the game is lost.
    pub fn max_wrong(self) -> u32 {
        match self {
            HangmanDifficulty::Easy => 8,
            HangmanDifficulty::Normal => 6,
            HangmanDifficulty::Hard => 5,
        }
    }

    /// True if a word of `len` letters belongs to this band.
    pub fn accepts_len(self, len: usize) -> bool {
        match self {
            HangmanDifficulty::Easy => len <= 5,
            HangmanDifficulty::Normal => (4..=8).contains(&len),
            HangmanDifficulty::Hard => len >= 6,
        }
    }

    /// Words of `pool` in this band, or the whole pool if the band is empty.
    pub fn candidates<'a>(self, pool: &'a [String]) -> Vec<&'a str> {
        let banded: Vec<&str> = pool
            .iter()
            .map(String::as_str)
            .filter(|w| self.accepts_len(w.chars().count()))
            .collect();
        if banded.is_empty() {
            pool.iter().map(String::as_str).collect()
        } else {
            banded
        }
    }
}

/// Why a guess was not applied. The game is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// The game is already won or lost.
    #[display("Game is already finished")]
    Finished,

    /// The input held no character.
    #[display("Guess is empty")]
    Empty,

    /// The letter was guessed before.
    #[display("Letter '{}' was already guessed", _0)]
    AlreadyGuessed(char),
}

impl std::error::Error for GuessError {}

/// A hangman round.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hangman {
    #[serde(skip)]
    word: String,
    #[serde(rename = "masked")]
    masked_word: String,
    #[serde(rename = "guessed")]
    guessed_letters: Vec<char>,
    #[serde(rename = "wrong")]
    wrong_count: u32,
    max_wrong: u32,
    finished: bool,
    won: bool,
    difficulty: HangmanDifficulty,
    #[serde(skip)]
    pool: Vec<String>,
    #[serde(skip)]
    rng: GameRng,
}

impl Hangman {
    /// Starts a round with a word from the built-in pool.
    pub fn new(difficulty: HangmanDifficulty, rng: GameRng) -> Self {
        Self::with_pool(difficulty, &WORD_POOL, rng)
    }

    /// Starts a round with a word drawn from `pool`.
    ///
    /// Words are lowercased. An empty pool falls back to the built-in one.
    #[instrument(skip(pool, rng), fields(pool_size = pool.len(), seed = rng.seed()))]
    pub fn with_pool(difficulty: HangmanDifficulty, pool: &[&str], rng: GameRng) -> Self {
        let source: &[&str] = if pool.is_empty() { &WORD_POOL } else { pool };
        let pool: Vec<String> = source.iter().map(|w| w.to_lowercase()).collect();

        let mut game = Self {
            word: String::new(),
            masked_word: String::new(),
            guessed_letters: Vec::new(),
            wrong_count: 0,
            max_wrong: difficulty.max_wrong(),
            finished: false,
            won: false,
            difficulty,
            pool,
            rng,
        };
        game.word = game.draw_word(None);
        game.update_masked();
        info!(%difficulty, len = game.word.chars().count(), "Created hangman game");
        game
    }

    /// Returns the word with unguessed letters hidden.
    pub fn masked_word(&self) -> &str {
        &self.masked_word
    }

    /// Returns the guessed letters in guessing order.
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    /// Returns the number of wrong guesses.
    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    /// Returns the number of wrong guesses that loses the round.
    pub fn max_wrong(&self) -> u32 {
        self.max_wrong
    }

    /// True once the round is won or lost.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// True if the word was completed.
    pub fn won(&self) -> bool {
        self.won
    }

    /// Returns the difficulty.
    pub fn difficulty(&self) -> HangmanDifficulty {
        self.difficulty
    }

    /// Reveals the secret word. Never part of the snapshot.
    pub fn secret_word(&self) -> &str {
        &self.word
    }

    /// Guesses the first character of `input`, case-insensitively.
    ///
    /// Returns whether the letter occurs in the word.
    ///
    /// # Errors
    ///
    /// Rejects guesses after the round ends, empty input and repeated letters.
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn guess(&mut self, input: &str) -> Result<bool, GuessError> {
        if self.finished {
            warn!("Guess after round finished");
            return Err(GuessError::Finished);
        }
        let letter = input
            .chars()
            .next()
            .and_then(|c| c.to_lowercase().next())
            .ok_or(GuessError::Empty)?;
        if self.guessed_letters.contains(&letter) {
            warn!(%letter, "Letter already guessed");
            return Err(GuessError::AlreadyGuessed(letter));
        }

        self.guessed_letters.push(letter);
        let hit = self.word.contains(letter);
        if !hit {
            self.wrong_count += 1;
        }
        self.update_masked();

        if self.masked_word == self.word {
            self.finished = true;
            self.won = true;
        }
        if self.wrong_count >= self.max_wrong {
            self.finished = true;
        }

        debug!(%letter, hit, wrong = self.wrong_count, masked = %self.masked_word, "Guess applied");
        Ok(hit)
    }

    /// Starts a new round with a new word of the same difficulty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        let previous = std::mem::take(&mut self.word);
        self.word = self.draw_word(Some(&previous));
        self.guessed_letters.clear();
        self.wrong_count = 0;
        self.finished = false;
        self.won = false;
        self.update_masked();
        info!(difficulty = %self.difficulty, "Reset hangman game");
    }

    /// Draws a word from the difficulty band, avoiding `exclude` when possible.
    fn draw_word(&mut self, exclude: Option<&str>) -> String {
        let candidates = self.difficulty.candidates(&self.pool);
        let fresh: Vec<&str> = candidates
            .iter()
            .copied()
            .filter(|w| Some(*w) != exclude)
            .collect();
        let choices = if fresh.is_empty() { &candidates } else { &fresh };
        let index = self.rng.gen_range_usize(0..choices.len());
        choices[index].to_string()
    }

    /// Recomputes the masked word from the secret word and guesses.
    fn update_masked(&mut self) {
        self.masked_word = self
            .word
            .chars()
            .map(|c| {
                if self.guessed_letters.contains(&c) {
                    c
                } else {
                    HIDDEN
                }
            })
            .collect();
    }
}
