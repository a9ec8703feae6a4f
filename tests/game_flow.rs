//! End-to-end games driven through the public library API.

use tactik::{GameSession, Mark, MoveError, StrategyKind};

/// Plays the first free cell, 1-indexed, as a scripted "player".
fn first_free_move(state: &[String]) -> Option<(usize, usize)> {
    state
        .iter()
        .enumerate()
        .find_map(|(i, row)| row.find('.').map(|j| (i + 1, j + 1)))
}

fn play_out(session: &mut GameSession) {
    while !session.is_over() {
        let (row, column) = first_free_move(&session.state()).expect("game not over");
        session.make_move(row, column).expect("legal move");
    }
}

#[test]
fn exhaustive_engine_never_loses_to_a_naive_player() {
    for player_first in [true, false] {
        let mut session = GameSession::new(3, 3, 3).unwrap();
        session.start(StrategyKind::Minimax, player_first).unwrap();
        play_out(&mut session);
        assert!(session.is_over());
        assert_ne!(session.winner(), Some(Mark::Player));
    }
}

#[test]
fn heuristic_engine_beats_a_naive_player_on_a_4x4() {
    let mut session = GameSession::new(4, 4, 3).unwrap();
    session
        .start(StrategyKind::Heuristic { max_depth: 4 }, true)
        .unwrap();
    play_out(&mut session);
    assert!(session.is_over());
    assert_ne!(session.winner(), Some(Mark::Player));
}

#[test]
fn every_game_keeps_piece_counts_balanced() {
    let mut session = GameSession::new(3, 3, 3).unwrap();
    session.start(StrategyKind::Minimax, false).unwrap();
    while !session.is_over() {
        let flat: String = session.state().concat();
        let x = flat.matches('x').count();
        let o = flat.matches('o').count();
        assert!(o >= x && o - x <= 1, "unbalanced counts in {}", flat);

        let (row, column) = first_free_move(&session.state()).unwrap();
        session.make_move(row, column).unwrap();
    }
}

#[test]
fn session_is_playable_without_an_explicit_start() {
    // Construction binds the Simple strategy as a default.
    let mut session = GameSession::new(3, 3, 3).unwrap();
    session.make_move(2, 2).unwrap();
    let flat: String = session.state().concat();
    assert_eq!(flat.matches('x').count(), 1);
    assert_eq!(flat.matches('o').count(), 1);
}

#[test]
fn illegal_input_never_advances_the_game() {
    let mut session = GameSession::new(3, 3, 3).unwrap();
    session.start(StrategyKind::Minimax, true).unwrap();
    session.make_move(2, 2).unwrap();
    let snapshot = session.state();

    assert_eq!(session.make_move(0, 0), Err(MoveError::OutsideBoard));
    assert_eq!(session.make_move(9, 9), Err(MoveError::OutsideBoard));
    assert_eq!(session.make_move(2, 2), Err(MoveError::OccupiedCell));
    assert_eq!(session.state(), snapshot);
}

#[test]
fn larger_threshold_games_run_to_completion() {
    let mut session = GameSession::new(4, 4, 4).unwrap();
    session
        .start(StrategyKind::Heuristic { max_depth: 3 }, true)
        .unwrap();
    play_out(&mut session);
    assert!(session.is_over());
}
