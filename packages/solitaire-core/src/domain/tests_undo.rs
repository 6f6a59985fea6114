//! Undo history: exact restores, the persistent undo counter and the depth cap.

use crate::config::GameOptions;
use crate::domain::pile::PileKind;
use crate::domain::rules::{DrawMode, PileId};
use crate::domain::scoring::ScoringMode;
use crate::domain::state::GameState;
use crate::domain::test_state_helpers::{card, column, dealt_game, game_from, options, pile};

#[test]
fn undoing_every_move_restores_the_deal() {
    let (mut game, clock) = dealt_game(options(ScoringMode::Standard, DrawMode::Three));
    let dealt = game.state().clone();

    let mut moves = 0;
    for _ in 0..5 {
        assert!(game.flip_hand());
        moves += 1;
        clock.advance_secs(3);
    }
    game.hold(PileId::Waste, 1);
    game.release(None);
    moves += 1;
    game.hold(PileId::Tableau(6), 1);
    game.release(Some(PileId::Foundation(0)));
    moves += 1;

    for _ in 0..moves {
        assert!(game.undo());
    }
    assert_eq!(game.state(), &dealt);
    assert_eq!(game.time_secs(), 0);
    assert!(!game.can_undo());

    assert!(!game.undo());
    assert_eq!(game.state(), &dealt);
    assert_eq!(game.undo_count(), moves);
}

#[test]
fn undo_takes_back_score() {
    let mut state = GameState::empty(0);
    state.waste = pile(PileKind::Deal, &["AH"]);
    let (mut game, _) = game_from(state, options(ScoringMode::Standard, DrawMode::Three));

    game.hold(PileId::Waste, 1);
    game.release(Some(PileId::Foundation(0)));
    assert_eq!(game.score(), 10);

    assert!(game.undo());
    assert_eq!(game.score(), 0);
    assert_eq!(game.waste_top(), Some(card("AH")));
    assert!(game.foundation(0).is_some_and(|f| f.is_empty()));
}

#[test]
fn undo_counter_survives_the_restore() {
    let (mut game, _) = dealt_game(options(ScoringMode::Standard, DrawMode::One));
    game.flip_hand();
    game.flip_hand();

    assert!(game.undo());
    assert_eq!(game.undo_count(), 1);
    game.flip_hand();
    assert!(game.undo());
    assert!(game.undo());
    assert_eq!(game.undo_count(), 3);
}

#[test]
fn bounded_history_forgets_the_oldest_moves() {
    let opts = GameOptions {
        undo_limit: Some(3),
        ..options(ScoringMode::Standard, DrawMode::One)
    };
    let (mut game, _) = dealt_game(opts);

    for _ in 0..5 {
        game.flip_hand();
    }
    for _ in 0..3 {
        assert!(game.undo());
    }
    assert!(!game.undo());
    assert_eq!(game.stock().height(), 22);
}

#[test]
fn flip_column_is_undoable_and_scores() {
    let mut state = GameState::empty(0);
    state.tableaus[3] = column(&["7C", "JD"], &[]);
    let (mut game, _) = game_from(state, options(ScoringMode::Standard, DrawMode::Three));

    assert!(game.flip_column(3));
    assert_eq!(game.tableau(3).and_then(|t| t.visible().top()), Some(card("JD")));
    assert_eq!(game.score(), 5);

    assert!(game.undo());
    assert!(game.tableau(3).is_some_and(|t| t.needs_flip()));
    assert_eq!(game.score(), 0);
}

#[test]
fn flip_column_without_a_gap_still_counts_as_a_move() {
    let (mut game, _) = dealt_game(options(ScoringMode::Standard, DrawMode::Three));
    let before = game.state().clone();

    for column in 0..7 {
        assert!(!game.flip_column(column));
    }
    assert_eq!(game.state().tableaus, before.tableaus);
    assert_eq!(game.score(), 35);

    for _ in 0..7 {
        assert!(game.undo());
    }
    assert_eq!(game.state(), &before);
    assert!(!game.undo());
}

#[test]
fn flip_column_on_a_fully_visible_column_scores_in_standard() {
    let mut state = GameState::empty(0);
    state.tableaus[0] = column(&[], &["KH"]);
    let (mut game, _) = game_from(state, options(ScoringMode::Standard, DrawMode::Three));

    assert!(!game.flip_column(0));
    assert_eq!(game.score(), 5);
    assert!(game.can_undo());
    assert_eq!(game.tableau(0).map(|t| t.visible().height()), Some(1));
}
