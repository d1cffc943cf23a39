//! Arcade server - session store, configuration and console front end.
//!
//! The engines in `arcade_games` are pure values; this crate owns them.
//!
//! # Architecture
//!
//! - **Session**: per-kind tables of live games behind one lock
//! - **Config**: TOML defaults for new games plus seed resolution
//! - **Console**: line-oriented play of any session through the store
//! - **Selfplay**: batch games of a random player against the tic-tac-toe AI
//!
//! # Example
//!
//! ```
//! use arcade_games::{AiDifficulty, TicTacToe};
//! use arcade_server::SessionStore;
//!
//! let store = SessionStore::new();
//! store.insert("game-1", TicTacToe::new(true, AiDifficulty::Optimal));
//! let turn = store
//!     .with_session("game-1", |game: &mut TicTacToe| game.make_move(0))
//!     .unwrap()
//!     .unwrap();
//! assert!(turn.reply.is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod selfplay;
mod session;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Config
pub use config::{ArcadeConfig, ConfigError, SEED_ENV};

// Crate-level exports - Console
pub use console::{ConsoleGame, play};

// Crate-level exports - Selfplay
pub use selfplay::{SelfplayReport, run_selfplay};

// Crate-level exports - Session
pub use session::{Registry, SessionError, SessionErrorKind, SessionGame, SessionId, SessionStore};
