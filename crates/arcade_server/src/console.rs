//! Line-oriented front end that plays a session through the store.
//!
//! Every command is one line: a game action, or one of `show`, `reset`,
//! `undo`, `help`, `quit`. Each line becomes one call into the store, so the
//! console behaves exactly like any other client of the session layer.

use crate::session::{SessionGame, SessionStore};
use anyhow::{Context, Result, anyhow};
use arcade_games::{GameStatus, Hangman, NumberGuess, RockPaperScissors, TicTacToe};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// A game that can be driven from the console.
pub trait ConsoleGame: SessionGame {
    /// Describes the accepted game input.
    const HELP: &'static str;

    /// Renders the public state.
    fn render(&self) -> String;

    /// Applies one game action and describes what happened.
    fn act(&mut self, input: &str) -> Result<String>;

    /// Starts the game over.
    fn restart(&mut self);

    /// Takes back the last action, if the game supports it.
    fn take_back(&mut self) -> Result<String> {
        Err(anyhow!("undo is not available in this game"))
    }
}

/// One parsed console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Show,
    Reset,
    Undo,
    Help,
    Skip,
    Action(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Command::Skip,
            "quit" | "exit" => Command::Quit,
            "show" => Command::Show,
            "reset" => Command::Reset,
            "undo" => Command::Undo,
            "help" | "?" => Command::Help,
            other => Command::Action(other),
        }
    }
}

/// Plays the session `id` of kind `G` until `quit` or end of input.
///
/// Rejected actions are reported and play continues.
///
/// # Errors
///
/// Fails when the session does not exist or the streams fail.
#[instrument(skip(store, input, output), fields(kind = %G::KIND))]
pub fn play<G, R, W>(store: &SessionStore, id: &str, input: R, mut output: W) -> Result<()>
where
    G: ConsoleGame,
    R: BufRead,
    W: Write,
{
    info!(session_id = id, "Console session started");
    let opening = store.with_session(id, |game: &mut G| game.render())?;
    writeln!(output, "{}\n{}\n{}", G::KIND, G::HELP, opening)?;

    for line in input.lines() {
        let line = line.context("Failed to read console input")?;
        let command = Command::parse(&line);
        debug!(?command, "Console command");

        let reply = match command {
            Command::Quit => break,
            Command::Skip => continue,
            Command::Help => G::HELP.to_string(),
            Command::Show => store.with_session(id, |game: &mut G| game.render())?,
            Command::Reset => store.with_session(id, |game: &mut G| {
                game.restart();
                format!("New game.\n{}", game.render())
            })?,
            Command::Undo => store.with_session(id, |game: &mut G| match game.take_back() {
                Ok(message) => format!("{}\n{}", message, game.render()),
                Err(e) => format!("Rejected: {}", e),
            })?,
            Command::Action(action) => store.with_session(id, |game: &mut G| match game.act(action) {
                Ok(message) => format!("{}\n{}", message, game.render()),
                Err(e) => format!("Rejected: {}", e),
            })?,
        };
        writeln!(output, "{}", reply)?;
    }

    info!(session_id = id, "Console session ended");
    Ok(())
}

impl ConsoleGame for TicTacToe {
    const HELP: &'static str = "Enter a cell 1-9, or undo / reset / show / quit.";

    fn render(&self) -> String {
        let status = match self.status() {
            GameStatus::InProgress => format!("{} to move", self.current_player()),
            GameStatus::Won(player) => format!("{} wins!", player),
            GameStatus::Draw => "Draw.".to_string(),
        };
        format!("{}\n{}", self.board().display(), status)
    }

    fn act(&mut self, input: &str) -> Result<String> {
        let cell: usize = input
            .parse()
            .with_context(|| format!("'{}' is not a cell number", input))?;
        let index = cell
            .checked_sub(1)
            .ok_or_else(|| anyhow!("cells are numbered 1-9"))?;
        let turn = self.make_move(index)?;
        Ok(match turn.reply {
            Some(reply) => format!("You played {}. AI played {}.", turn.played, reply),
            None => format!("Played {}.", turn.played),
        })
    }

    fn restart(&mut self) {
        self.reset();
    }

    fn take_back(&mut self) -> Result<String> {
        let removed = self.undo()?;
        Ok(format!("Took back {} move(s).", removed))
    }
}

impl ConsoleGame for Hangman {
    const HELP: &'static str = "Enter a letter, or reset / show / quit.";

    fn render(&self) -> String {
        let guessed: String = self.guessed_letters().iter().collect();
        let status = if self.won() {
            "You win!".to_string()
        } else if self.finished() {
            "Out of guesses.".to_string()
        } else {
            format!("{} of {} misses used", self.wrong_count(), self.max_wrong())
        };
        format!("{}  [{}]\n{}", self.masked_word(), guessed, status)
    }

    fn act(&mut self, input: &str) -> Result<String> {
        let hit = self.guess(input)?;
        Ok(if hit { "Hit." } else { "Miss." }.to_string())
    }

    fn restart(&mut self) {
        self.reset();
    }
}

impl ConsoleGame for NumberGuess {
    const HELP: &'static str = "Enter a whole number, or reset / show / quit.";

    fn render(&self) -> String {
        let last = self
            .last()
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        let hint = self.hint().map_or_else(|| "-".to_string(), |h| h.to_string());
        format!(
            "Range 1-{}  tries {}  last {}  hint {}{}",
            self.max(),
            self.tries(),
            last,
            hint,
            if self.won() { "  You got it!" } else { "" }
        )
    }

    fn act(&mut self, input: &str) -> Result<String> {
        let n: i64 = input
            .parse()
            .with_context(|| format!("'{}' is not a number", input))?;
        let hint = self.guess(n)?;
        Ok(format!("{} -> {}", n, hint))
    }

    fn restart(&mut self) {
        self.reset();
    }
}

impl ConsoleGame for RockPaperScissors {
    const HELP: &'static str = "Enter rock, paper or scissors, or reset / show / quit.";

    fn render(&self) -> String {
        let mut text = format!(
            "You {} - {} AI  (first to {}, {} rounds)",
            self.player_score(),
            self.ai_score(),
            self.target(),
            self.rounds_played()
        );
        if let Some(winner) = self.winner() {
            text.push_str(&format!("\nMatch over: {} wins.", winner));
        }
        text
    }

    fn act(&mut self, input: &str) -> Result<String> {
        let result = self.play(input)?;
        let ai = self
            .last_ai_move()
            .map_or_else(|| "-".to_string(), |t| t.to_string());
        Ok(format!("AI threw {}: you {}.", ai, result))
    }

    fn restart(&mut self) {
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_games::AiDifficulty;
    use std::io::Cursor;

    fn run<G: ConsoleGame>(store: &SessionStore, id: &str, script: &str) -> String {
        let mut out = Vec::new();
        play::<G, _, _>(store, id, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse(" quit "), Command::Quit);
        assert_eq!(Command::parse(""), Command::Skip);
        assert_eq!(Command::parse("5"), Command::Action("5"));
    }

    #[test]
    fn test_tictactoe_script() {
        let store = SessionStore::new();
        store.insert("t", TicTacToe::new(false, AiDifficulty::Easy));
        let out = run::<TicTacToe>(&store, "t", "1\n4\n2\n5\n3\n4\nundo\n");
        assert!(out.contains("X wins!"));
        assert!(out.contains("Rejected: Game is already over"));
        assert!(out.contains("Took back 1 move(s)."));
        let game: TicTacToe = store.snapshot("t").unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_bad_input_is_rejected_not_fatal() {
        let store = SessionStore::new();
        store.insert("t", TicTacToe::default());
        let out = run::<TicTacToe>(&store, "t", "zero\n0\n10\nquit\n5\n");
        assert_eq!(out.matches("Rejected").count(), 3);
        let game: TicTacToe = store.snapshot("t").unwrap();
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_undo_unsupported_game() {
        let store = SessionStore::new();
        store.insert("h", Hangman::with_pool(Default::default(), &["code"], arcade_games::GameRng::new(1)));
        let out = run::<Hangman>(&store, "h", "undo\nc\n");
        assert!(out.contains("Rejected: undo is not available"));
        assert!(out.contains("c___"));
    }

    #[test]
    fn test_missing_session_fails() {
        let store = SessionStore::new();
        let mut out = Vec::new();
        let result = play::<NumberGuess, _, _>(&store, "nope", Cursor::new(""), &mut out);
        assert!(result.is_err());
    }
}
