//! Time penalties, the game clock and scores carried between deals.

use std::sync::Arc;

use crate::config::GameOptions;
use crate::domain::pile::PileKind;
use crate::domain::rules::DrawMode;
use crate::domain::scoring::ScoringMode;
use crate::domain::state::GameState;
use crate::domain::test_state_helpers::{dealt_game, game_from, options, pile, TEST_SEED};
use crate::domain::{ManualClock, Solitaire};

fn started(scoring: ScoringMode, initial: i32) -> (Solitaire, Arc<ManualClock>) {
    let mut state = GameState::empty(initial);
    state.stock = pile(PileKind::Deal, &["2C", "3C", "4C"]);
    let (mut game, clock) = game_from(state, options(scoring, DrawMode::One));
    assert!(game.flip_hand());
    (game, clock)
}

#[test]
fn clock_starts_on_the_first_move() {
    let (mut game, clock) = dealt_game(options(ScoringMode::Standard, DrawMode::Three));
    clock.advance_secs(120);
    assert_eq!(game.time_secs(), 0);
    assert_eq!(game.score(), 0);

    game.flip_hand();
    clock.advance_millis(12_999);
    assert_eq!(game.time_secs(), 12);
}

#[test]
fn penalties_are_anchored_to_ten_second_steps() {
    let (mut game, clock) = started(ScoringMode::Standard, 100);

    clock.advance_secs(25);
    assert_eq!(game.score(), 96);
    assert_eq!(game.penalty_anchor(), 20);

    clock.advance_secs(4);
    assert_eq!(game.score(), 96);

    clock.advance_secs(1);
    assert_eq!(game.score(), 94);
    assert_eq!(game.penalty_anchor(), 30);
}

#[test]
fn late_settlement_charges_the_same() {
    let (mut punctual, punctual_clock) = started(ScoringMode::Standard, 100);
    let (mut late, late_clock) = started(ScoringMode::Standard, 100);

    for _ in 0..9 {
        punctual_clock.advance_secs(7);
        punctual.score();
    }
    late_clock.advance_secs(63);

    assert_eq!(punctual.score(), late.score());
    assert_eq!(late.score(), 88);
}

#[test]
fn untimed_and_vegas_games_have_no_time_penalty() {
    let (mut untimed, clock) = started(ScoringMode::Standard, 50);
    untimed.set_timed(false);
    clock.advance_secs(300);
    assert_eq!(untimed.score(), 50);
    assert_eq!(untimed.settle_time_penalties(), 0);

    let (mut vegas, clock) = started(ScoringMode::Vegas, -52);
    clock.advance_secs(300);
    assert_eq!(vegas.score(), -52);
}

#[test]
fn penalties_stop_at_zero() {
    let (mut game, clock) = started(ScoringMode::Standard, 3);
    clock.advance_secs(60);
    assert_eq!(game.score(), 0);
    assert_eq!(game.penalty_anchor(), 60);
}

#[test]
fn vegas_stake_is_charged_per_deal() {
    let vegas = options(ScoringMode::Vegas, DrawMode::Three);
    let (mut game, _) = dealt_game(GameOptions {
        initial_score: -52,
        ..vegas.clone()
    });

    let mut next = game.next_game(vegas.clone());
    assert_eq!(next.score(), -52);

    let cumulative = GameOptions {
        cumulative: true,
        ..vegas
    };
    let mut second = next.next_game(cumulative.clone());
    assert_eq!(second.score(), -104);
    let mut third = second.next_game(cumulative);
    assert_eq!(third.score(), -156);
}

#[test]
fn standard_next_game_starts_from_zero() {
    let (mut game, _) = dealt_game(GameOptions {
        initial_score: 500,
        ..options(ScoringMode::Standard, DrawMode::Three)
    });
    let mut next = game.next_game(GameOptions::default());
    assert_eq!(next.score(), 0);
    assert_eq!(next.stock().height(), 24);
}

#[test]
fn replay_deals_the_same_cards() {
    let (mut game, _) = dealt_game(options(ScoringMode::Standard, DrawMode::Three));
    game.flip_hand();

    let mut replay = game.replay_seed(TEST_SEED);
    assert_eq!(replay.seed(), TEST_SEED);
    assert_eq!(replay.stock().height(), 24);
    assert!(!replay.can_undo());

    let (fresh, _) = dealt_game(options(ScoringMode::Standard, DrawMode::Three));
    assert_eq!(replay.state().tableaus, fresh.state().tableaus);
    assert_eq!(replay.state().stock, fresh.state().stock);
    assert_eq!(replay.score(), 0);
}

#[test]
fn cumulative_vegas_replay_keeps_the_bankroll() {
    let mut opts = GameOptions {
        initial_score: -37,
        ..options(ScoringMode::Vegas, DrawMode::One)
    };
    let (mut game, _) = dealt_game(opts.clone());
    game.set_cumulative(true);
    let mut replay = game.replay_seed(7);
    assert_eq!(replay.score(), -37);
    assert_eq!(replay.seed(), 7);

    opts.cumulative = false;
    let (mut plain, _) = dealt_game(opts);
    let mut plain_replay = plain.replay_seed(7);
    assert_eq!(plain_replay.score(), -52);
}
