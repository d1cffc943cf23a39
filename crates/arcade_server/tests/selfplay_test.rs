//! Self-play batches and config-driven setup.

use arcade_games::{AiDifficulty, GameRng, HangmanDifficulty, NumberGuessDifficulty};
use arcade_server::{ArcadeConfig, SessionStore, run_selfplay};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_minimax_never_loses_selfplay() {
    let store = SessionStore::new();
    let report = run_selfplay(&store, 200, AiDifficulty::Optimal, &mut GameRng::new(2024)).unwrap();
    assert_eq!(report.x_wins, 0);
    assert_eq!(report.total(), 200);
    assert!(report.o_wins > 0);
}

#[test]
fn test_report_serializes_camel_case() {
    let store = SessionStore::new();
    let report = run_selfplay(&store, 3, AiDifficulty::Easy, &mut GameRng::new(1)).unwrap();
    let json = serde_json::to_value(report).unwrap();
    assert!(json.get("xWins").is_some());
    assert!(json.get("oWins").is_some());
    assert!(json.get("draws").is_some());
}

#[test]
fn test_config_file_roundtrip() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("arcade.toml");
    fs::write(
        &path,
        r#"tictactoe_vs_ai = false
tictactoe_difficulty = "OPTIMAL"
hangman_difficulty = "hard"
number_guess_difficulty = "insane"
rps_target = 0
seed = 99
"#,
    )
    .expect("Failed to write config");

    let config = ArcadeConfig::from_file(&path).unwrap();
    assert!(!*config.tictactoe_vs_ai());
    assert_eq!(config.tictactoe_difficulty(), AiDifficulty::Optimal);
    assert_eq!(config.hangman_difficulty(), HangmanDifficulty::Hard);
    assert_eq!(config.number_guess_difficulty(), NumberGuessDifficulty::Insane);
    assert_eq!(*config.rps_target(), 0);
    assert_eq!(config.resolve_seed(None, None), Some(99));
}

#[test]
fn test_missing_config_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = ArcadeConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ArcadeConfig::default());
}

#[test]
fn test_unreadable_config_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    // A directory exists but cannot be read as a file.
    let err = ArcadeConfig::load_or_default(dir.path()).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
