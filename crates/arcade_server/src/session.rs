//! In-memory session store for live games.
//!
//! Each game kind has its own table keyed by session id; the table entry
//! owns the game. All tables sit behind one mutex, and every action runs
//! start to finish while holding it, so two actions on the same session
//! never interleave.

use arcade_games::{GameKind, Hangman, NumberGuess, RockPaperScissors, TicTacToe};
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// The per-kind session tables.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tictactoe: HashMap<SessionId, TicTacToe>,
    hangman: HashMap<SessionId, Hangman>,
    number_guess: HashMap<SessionId, NumberGuess>,
    rps: HashMap<SessionId, RockPaperScissors>,
}

/// A game type the store can hold.
pub trait SessionGame: Clone + Send + 'static {
    /// Which catalog entry this game is.
    const KIND: GameKind;

    /// The table holding sessions of this kind.
    fn table(registry: &mut Registry) -> &mut HashMap<SessionId, Self>;
}

impl SessionGame for TicTacToe {
    const KIND: GameKind = GameKind::TicTacToe;

    fn table(registry: &mut Registry) -> &mut HashMap<SessionId, Self> {
        &mut registry.tictactoe
    }
}

impl SessionGame for Hangman {
    const KIND: GameKind = GameKind::Hangman;

    fn table(registry: &mut Registry) -> &mut HashMap<SessionId, Self> {
        &mut registry.hangman
    }
}

impl SessionGame for NumberGuess {
    const KIND: GameKind = GameKind::NumberGuess;

    fn table(registry: &mut Registry) -> &mut HashMap<SessionId, Self> {
        &mut registry.number_guess
    }
}

impl SessionGame for RockPaperScissors {
    const KIND: GameKind = GameKind::Rps;

    fn table(registry: &mut Registry) -> &mut HashMap<SessionId, Self> {
        &mut registry.rps
    }
}

/// What went wrong in the session layer.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionErrorKind {
    /// No session of this kind has the id.
    #[display("No {} session with id '{}'", kind, id)]
    NotFound {
        /// Game kind looked up.
        kind: GameKind,
        /// Session id looked up.
        id: SessionId,
    },
}

/// Session error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", kind, file, line)]
pub struct SessionError {
    /// What went wrong.
    pub kind: SessionErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Creates a not-found error for a session of kind `G`.
    #[track_caller]
    pub fn not_found<G: SessionGame>(id: &str) -> Self {
        Self::new(SessionErrorKind::NotFound {
            kind: G::KIND,
            id: id.to_string(),
        })
    }
}

/// Shared handle to all live sessions. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    registry: Arc<Mutex<Registry>>,
}

impl SessionStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session store");
        Self::default()
    }

    /// Locks the tables.
    ///
    /// Engine actions are plain value updates, so a panic inside one
    /// leaves no half-applied state behind and poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores `game` under `id`, returning the game it replaced.
    #[instrument(skip(self, game), fields(kind = %G::KIND))]
    pub fn insert<G: SessionGame>(
        &self,
        id: impl Into<SessionId> + std::fmt::Debug,
        game: G,
    ) -> Option<G> {
        let id = id.into();
        let replaced = G::table(&mut self.lock()).insert(id.clone(), game);
        if replaced.is_some() {
            info!(session_id = %id, "Replaced existing session");
        } else {
            info!(session_id = %id, "Created new session");
        }
        replaced
    }

    /// Runs `action` on the session's game while holding the lock.
    ///
    /// Lookup, the engine call and whatever `action` reads back all happen
    /// in one critical section.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no session of kind `G` has `id`.
    #[instrument(skip(self, action), fields(kind = %G::KIND))]
    pub fn with_session<G, R>(
        &self,
        id: &str,
        action: impl FnOnce(&mut G) -> R,
    ) -> Result<R, SessionError>
    where
        G: SessionGame,
    {
        let mut registry = self.lock();
        let game = G::table(&mut registry).get_mut(id).ok_or_else(|| {
            warn!(session_id = id, "Session not found");
            SessionError::not_found::<G>(id)
        })?;
        let result = action(game);
        debug!(session_id = id, "Session action completed");
        Ok(result)
    }

    /// Returns a copy of the session's current game.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no session of kind `G` has `id`.
    pub fn snapshot<G: SessionGame>(&self, id: &str) -> Result<G, SessionError> {
        self.with_session(id, |game: &mut G| game.clone())
    }

    /// Removes and returns the session's game.
    #[instrument(skip(self), fields(kind = %G::KIND))]
    pub fn remove<G: SessionGame>(&self, id: &str) -> Option<G> {
        let removed = G::table(&mut self.lock()).remove(id);
        debug!(session_id = id, found = removed.is_some(), "Session removed");
        removed
    }

    /// True if a session of kind `G` has `id`.
    pub fn contains<G: SessionGame>(&self, id: &str) -> bool {
        G::table(&mut self.lock()).contains_key(id)
    }

    /// Number of live sessions of kind `G`.
    pub fn len<G: SessionGame>(&self) -> usize {
        G::table(&mut self.lock()).len()
    }

    /// Ids of live sessions of kind `G`, sorted.
    pub fn ids<G: SessionGame>(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = G::table(&mut self.lock()).keys().cloned().collect();
        ids.sort();
        ids
    }
}
