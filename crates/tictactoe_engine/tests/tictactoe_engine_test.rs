//! Tests for the engine's call-in API.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;
use tictactoe_engine::rules::LINES;
use tictactoe_engine::{Board, Engine, Mark, Position, RoundStatus, Square};

fn coords(pos: Position) -> (i64, i64) {
    (pos.row() as i64, pos.col() as i64)
}

fn play(engine: &mut Engine, pos: Position, mark: Mark) {
    let (row, col) = coords(pos);
    assert!(engine.apply_move(row, col, mark), "{pos} should be free");
}

/// Fills the board from a row-major list of marks (`None` = empty).
fn engine_with(cells: [Option<Mark>; 9]) -> Engine {
    let mut engine = Engine::new();
    for (pos, cell) in Position::ALL.iter().zip(cells) {
        if let Some(mark) = cell {
            play(&mut engine, *pos, mark);
        }
    }
    engine
}

const X: Option<Mark> = Some(Mark::Player);
const O: Option<Mark> = Some(Mark::Bot);
const E: Option<Mark> = None;

#[test]
fn test_apply_move_on_occupied_square_is_rejected() {
    let mut engine = engine_with([X, O, E, E, X, E, E, E, O]);
    for pos in [Position::TopLeft, Position::TopCenter, Position::Center, Position::BottomRight] {
        let before = engine.clone();
        let (row, col) = coords(pos);
        assert!(!engine.apply_move(row, col, Mark::Player));
        assert!(!engine.apply_move(row, col, Mark::Bot));
        assert_eq!(engine, before);
    }
}

#[test]
fn test_apply_move_out_of_bounds_is_rejected() {
    let mut engine = Engine::new();
    for (row, col) in [(-1, 0), (0, -1), (3, 0), (0, 3), (3, 3), (-5, 7), (i64::MIN, 0)] {
        assert!(!engine.apply_move(row, col, Mark::Player));
    }
    assert_eq!(engine.board(), &Board::new());
}

#[test]
fn test_apply_move_sets_square() {
    let mut engine = Engine::new();
    assert!(engine.apply_move(2, 1, Mark::Bot));
    assert_eq!(
        engine.board().get(Position::BottomCenter),
        Square::Occupied(Mark::Bot)
    );
    assert_eq!(engine.board().get_at(2, 1), Some(Square::Occupied(Mark::Bot)));
}

#[test]
fn test_every_line_is_detected_for_both_marks() {
    for mark in Mark::iter() {
        for line in LINES {
            let mut engine = Engine::new();
            for pos in line {
                play(&mut engine, pos, mark);
            }
            assert_eq!(engine.evaluate_winner(), Some(mark), "line {line:?}");
        }
    }
}

#[test]
fn test_no_false_positives() {
    let boards = [
        [E, E, E, E, E, E, E, E, E],
        [X, X, O, E, E, E, E, E, E],
        [X, O, X, X, O, O, O, X, X],
        [X, O, X, O, X, X, O, X, O],
        [O, X, E, X, O, E, E, E, X],
    ];
    for cells in boards {
        assert_eq!(engine_with(cells).evaluate_winner(), None);
    }
}

#[test]
fn test_draw_requires_full_board() {
    let partial = engine_with([X, O, X, O, X, X, O, X, E]);
    assert!(!partial.is_draw());

    let drawn = engine_with([X, O, X, O, X, X, O, X, O]);
    assert_eq!(drawn.evaluate_winner(), None);
    assert!(drawn.is_draw());
    assert_eq!(drawn.status(), RoundStatus::Draw);
}

#[test]
fn test_full_board_with_line_is_a_win() {
    let engine = engine_with([X, X, X, O, O, X, X, O, O]);
    assert!(engine.is_draw());
    assert_eq!(engine.evaluate_winner(), Some(Mark::Player));
    assert_eq!(engine.status(), RoundStatus::Won(Mark::Player));
}

#[test]
fn test_bot_completes_its_line() {
    // Bot holds two of the middle column; the player has no threat.
    let engine = engine_with([X, O, E, E, O, E, E, E, X]);
    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(
        engine.select_computer_move(&mut rng),
        Some(Position::BottomCenter)
    );
}

#[test]
fn test_bot_prefers_winning_to_blocking() {
    // Player threatens the left column, bot can finish the right column.
    let engine = engine_with([X, E, O, X, E, O, E, X, E]);
    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(
        engine.select_computer_move(&mut rng),
        Some(Position::BottomRight)
    );
}

#[test]
fn test_bot_blocks_player_line() {
    let engine = engine_with([X, E, E, E, X, E, O, E, E]);
    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(
        engine.select_computer_move(&mut rng),
        Some(Position::BottomRight)
    );
}

#[test]
fn test_bot_never_picks_occupied_square() {
    let engine = engine_with([X, E, E, E, O, E, E, E, E]);
    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let pos = engine
            .select_computer_move(&mut rng)
            .expect("board has empty squares");
        assert!(engine.board().is_empty(pos));
    }
}

#[test]
fn test_bot_random_tier_reaches_every_empty_square() {
    let engine = engine_with([E, E, E, E, X, E, E, E, E]);
    let mut seen = std::collections::HashSet::new();
    for seed in 0..512 {
        let mut rng = StdRng::seed_from_u64(seed);
        seen.insert(engine.select_computer_move(&mut rng));
    }
    assert_eq!(seen.len(), 8);
}

#[test]
fn test_reset_clears_board_and_keeps_score() {
    let mut engine = engine_with([X, X, X, O, O, E, E, E, E]);
    engine.set_turn(Mark::Bot);
    assert_eq!(engine.evaluate_winner(), Some(Mark::Player));

    engine.record_result(Mark::Player);
    engine.record_result(Mark::Bot);
    engine.reset();

    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.turn(), Mark::Player);
    assert_eq!(engine.score().player_wins(), 1);
    assert_eq!(engine.score().bot_wins(), 1);
}

#[test]
fn test_player_completes_top_row() {
    // The collaborator places the bot's marks away from the top row.
    let mut engine = Engine::new();
    let script = [
        (Position::TopLeft, Position::Center),
        (Position::TopCenter, Position::BottomLeft),
        (Position::TopRight, Position::BottomRight),
    ];

    for (player_pos, bot_pos) in script {
        play(&mut engine, player_pos, Mark::Player);
        engine.pass_turn();
        if let Some(winner) = engine.evaluate_winner() {
            assert_eq!(winner, Mark::Player);
            assert_eq!(player_pos, Position::TopRight);
            break;
        }
        assert!(!engine.is_draw());
        play(&mut engine, bot_pos, Mark::Bot);
        assert_eq!(engine.evaluate_winner(), None);
        engine.pass_turn();
    }

    assert_eq!(engine.evaluate_winner(), Some(Mark::Player));
    engine.record_result(Mark::Player);
    engine.reset();

    assert_eq!(engine.score().player_wins(), 1);
    assert_eq!(engine.score().bot_wins(), 0);
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.turn(), Mark::Player);
}

#[test]
fn test_player_wins_with_fork_against_heuristic() {
    let mut engine = Engine::new();
    let mut rng = StdRng::seed_from_u64(5);

    // Opening reply fixed so the rest of the line is forced.
    play(&mut engine, Position::TopLeft, Mark::Player);
    play(&mut engine, Position::MiddleRight, Mark::Bot);

    // Threat on the left column; the bot blocks it and threatens the middle row.
    play(&mut engine, Position::BottomLeft, Mark::Player);
    let reply = engine.select_computer_move(&mut rng).unwrap();
    assert_eq!(reply, Position::MiddleLeft);
    play(&mut engine, reply, Mark::Bot);

    // Blocking the centre forks both diagonals.
    play(&mut engine, Position::Center, Mark::Player);
    assert_eq!(engine.evaluate_winner(), None);
    let reply = engine.select_computer_move(&mut rng).unwrap();
    assert_eq!(reply, Position::TopRight);
    play(&mut engine, reply, Mark::Bot);

    play(&mut engine, Position::BottomRight, Mark::Player);
    assert_eq!(engine.evaluate_winner(), Some(Mark::Player));
}

#[test]
fn test_engine_snapshot_serializes() {
    let engine = engine_with([X, E, E, E, O, E, E, E, E]);
    let json = serde_json::to_value(&engine).unwrap();
    assert_eq!(json["turn"], "Player");
    assert_eq!(json["score"]["player_wins"], 0);
    assert_eq!(json["board"]["squares"][0], serde_json::json!({ "Occupied": "Player" }));
    assert_eq!(json["board"]["squares"][1], "Empty");
}
