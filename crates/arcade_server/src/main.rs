//! Arcade - console front end
//!
//! Plays one session of the chosen game on stdin/stdout, or runs a
//! self-play batch against the tic-tac-toe AI.

#![warn(missing_docs)]

use anyhow::Result;
use arcade_games::{
    AiDifficulty, GameKind, GameRng, Hangman, HangmanDifficulty, NumberGuess,
    NumberGuessDifficulty, RockPaperScissors, TicTacToe,
};
use arcade_server::{
    ArcadeConfig, Cli, Command, ConsoleGame, SEED_ENV, SessionStore, play, run_selfplay,
};
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Session id of the single console game.
const CONSOLE_SESSION: &str = "console";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ArcadeConfig::load_or_default(&cli.config)?;
    let seed = config.resolve_seed(cli.seed, std::env::var(SEED_ENV).ok().as_deref());
    let mut rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), "Arcade starting");

    let store = SessionStore::new();

    match cli.command {
        Command::List => list_games(),
        Command::TicTacToe {
            two_player,
            difficulty,
        } => {
            let difficulty = difficulty
                .map_or_else(|| config.tictactoe_difficulty(), |d| AiDifficulty::parse_or_default(&d));
            let vs_ai = *config.tictactoe_vs_ai() && !two_player;
            run_console(&store, TicTacToe::new(vs_ai, difficulty))
        }
        Command::Hangman { difficulty } => {
            let difficulty = difficulty.map_or_else(
                || config.hangman_difficulty(),
                |d| HangmanDifficulty::parse_or_default(&d),
            );
            run_console(&store, Hangman::new(difficulty, rng.fork()))
        }
        Command::NumberGuess { difficulty } => {
            let difficulty = difficulty.map_or_else(
                || config.number_guess_difficulty(),
                |d| NumberGuessDifficulty::parse_or_default(&d),
            );
            run_console(&store, NumberGuess::new(difficulty, rng.fork()))
        }
        Command::Rps { target } => {
            let target = target.unwrap_or(*config.rps_target());
            run_console(&store, RockPaperScissors::new(target, rng.fork()))
        }
        Command::Selfplay { games, difficulty } => {
            let difficulty = difficulty
                .map_or_else(|| config.tictactoe_difficulty(), |d| AiDifficulty::parse_or_default(&d));
            let report = run_selfplay(&store, games, difficulty, &mut rng.fork())?;
            println!("{}", report);
            Ok(())
        }
    }
}

/// Prints the game catalog as JSON.
fn list_games() -> Result<()> {
    let games: Vec<serde_json::Value> = GameKind::iter()
        .map(|kind| serde_json::json!({ "id": kind.id(), "name": kind.name() }))
        .collect();
    println!("{}", serde_json::to_string_pretty(&games)?);
    Ok(())
}

/// Plays `game` on stdin/stdout until quit or end of input.
#[instrument(skip(store, game), fields(kind = %G::KIND))]
fn run_console<G: ConsoleGame>(store: &SessionStore, game: G) -> Result<()> {
    store.insert(CONSOLE_SESSION, game);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play::<G, _, _>(store, CONSOLE_SESSION, stdin.lock(), stdout.lock())?;
    store.remove::<G>(CONSOLE_SESSION);
    Ok(())
}
