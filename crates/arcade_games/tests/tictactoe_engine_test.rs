//! Behavioral tests for the tic-tac-toe engine and its AI strategies.

use arcade_games::{
    AiDifficulty, Board, GameStatus, Move, MoveError, Position, Square, TicTacToe,
    TicTacToePlayer as Player, ai, rules,
};
use proptest::prelude::*;

/// Plays every X continuation against the engine's AI, tallying
/// (x_wins, o_wins, draws) over all finished games.
fn explore_all_x_lines(game: &TicTacToe, tally: &mut (u32, u32, u32)) {
    match game.status() {
        GameStatus::Won(Player::X) => {
            tally.0 += 1;
            return;
        }
        GameStatus::Won(Player::O) => {
            tally.1 += 1;
            return;
        }
        GameStatus::Draw => {
            tally.2 += 1;
            return;
        }
        GameStatus::InProgress => {}
    }
    assert_eq!(game.current_player(), Player::X);
    for pos in Position::valid_moves(game.board()) {
        let mut next = game.clone();
        next.make_move(pos.to_index()).unwrap();
        explore_all_x_lines(&next, tally);
    }
}

#[test]
fn test_minimax_never_loses_to_any_x_line() {
    let mut tally = (0, 0, 0);
    explore_all_x_lines(&TicTacToe::new(true, AiDifficulty::Optimal), &mut tally);
    assert_eq!(tally.0, 0, "X found a winning line against minimax");
    assert!(tally.1 > 0);
    assert!(tally.2 > 0);
}

#[test]
fn test_heuristic_can_be_beaten() {
    let mut tally = (0, 0, 0);
    explore_all_x_lines(&TicTacToe::new(true, AiDifficulty::Easy), &mut tally);
    assert!(tally.0 > 0);
}

#[test]
fn test_minimax_is_reproducible() {
    let script = [0, 8, 6, 5];
    let run = || {
        let mut game = TicTacToe::new(true, AiDifficulty::Optimal);
        for cell in script {
            if game.make_move(cell).is_err() {
                break;
            }
        }
        game
    };
    assert_eq!(run(), run());
}

#[test]
fn test_minimax_reply_sequence() {
    let mut game = TicTacToe::new(true, AiDifficulty::Optimal);
    let turn = game.make_move(0).unwrap();
    assert_eq!(turn.reply, Some(Move::new(Player::O, Position::Center)));

    // X threatens the top row; O must block at 2.
    let turn = game.make_move(1).unwrap();
    assert_eq!(turn.reply, Some(Move::new(Player::O, Position::TopRight)));
}

#[test]
fn test_human_game_nine_moves_draw() {
    let mut game = TicTacToe::new(false, AiDifficulty::Easy);
    for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert_eq!(game.status(), GameStatus::InProgress);
        game.make_move(cell).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.make_move(0), Err(MoveError::GameOver));
}

#[test]
fn test_undo_in_ai_game_returns_turn_to_x() {
    let mut game = TicTacToe::new(true, AiDifficulty::Easy);
    game.make_move(0).unwrap();
    game.make_move(8).unwrap();
    let before_second = {
        let mut g = TicTacToe::new(true, AiDifficulty::Easy);
        g.make_move(0).unwrap();
        g
    };
    assert_eq!(game.undo(), Ok(2));
    assert_eq!(game, before_second);
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_undo_in_human_game_removes_o_only() {
    let mut game = TicTacToe::new(false, AiDifficulty::Easy);
    game.make_move(4).unwrap();
    game.make_move(0).unwrap();
    assert_eq!(game.undo(), Ok(1));
    assert_eq!(game.current_player(), Player::O);
    assert_eq!(game.history(), [Move::new(Player::X, Position::Center)]);
}

fn any_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ])
    .prop_map(|cells| {
        let mut board = Board::new();
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            board.set(pos, cell);
        }
        board
    })
}

proptest! {
    #[test]
    fn prop_winner_iff_uniform_line(board in any_board()) {
        let uniform = rules::LINES.iter().any(|[a, b, c]| {
            board.get(*a) != Square::Empty
                && board.get(*a) == board.get(*b)
                && board.get(*b) == board.get(*c)
        });
        prop_assert_eq!(rules::check_winner(&board).is_some(), uniform);
        if board.is_full() && !uniform {
            prop_assert_eq!(rules::status(&board), GameStatus::Draw);
        }
    }

    #[test]
    fn prop_heuristic_prefers_immediate_win(board in any_board()) {
        let winning: Vec<Position> = Position::valid_moves(&board)
            .into_iter()
            .filter(|&pos| {
                let mut b = board.clone();
                b.set(pos, Square::Occupied(Player::O));
                rules::is_winning(&b, Player::O)
            })
            .collect();
        if let Some(first) = winning.first() {
            prop_assert_eq!(ai::heuristic_move(&board, Player::O), Some(*first));
        }
    }

    #[test]
    fn prop_random_play_keeps_invariants(
        cells in prop::collection::vec(0usize..12, 0..30),
        vs_ai in any::<bool>(),
        optimal in any::<bool>(),
    ) {
        let difficulty = if optimal { AiDifficulty::Optimal } else { AiDifficulty::Easy };
        let mut game = TicTacToe::new(vs_ai, difficulty);
        for cell in cells {
            let before = game.clone();
            match game.make_move(cell) {
                Ok(_) => {
                    let x = game.board().count(Player::X);
                    let o = game.board().count(Player::O);
                    prop_assert!(x == o || x == o + 1);
                    prop_assert_eq!(x + o, game.history().len());
                    prop_assert_eq!(game.status(), rules::status(game.board()));
                    if vs_ai && !game.status().is_over() {
                        prop_assert_eq!(game.current_player(), Player::X);
                    }
                }
                Err(_) => prop_assert_eq!(&game, &before),
            }
        }
    }

    #[test]
    fn prop_undo_inverts_human_move(cells in prop::collection::vec(0usize..9, 1..9)) {
        let mut game = TicTacToe::new(false, AiDifficulty::Easy);
        for cell in cells {
            let before = game.clone();
            if game.make_move(cell).is_ok() {
                prop_assert_eq!(game.undo(), Ok(1));
                prop_assert_eq!(&game, &before);
                game.make_move(cell).unwrap();
            }
        }
    }
}
