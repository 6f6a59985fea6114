//! Property tests: stacking rules, card conservation and undo over random play.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::dealing::DECK_SIZE;
use crate::domain::pile::{Pile, PileKind};
use crate::domain::rules::DrawMode;
use crate::domain::scoring::ScoringMode;
use crate::domain::state::GameState;
use crate::domain::test_gens::{self, Action};
use crate::domain::test_state_helpers::{dealt_game, options};
use crate::domain::{test_prelude, Card, Solitaire};

fn apply(game: &mut Solitaire, action: &Action) {
    match *action {
        Action::Move { from, count, to } => {
            game.hold(from, count);
            game.release(to);
        }
        Action::FlipHand => {
            game.flip_hand();
        }
        Action::FlipColumn(column) => {
            game.flip_column(column);
        }
        Action::Undo => {
            game.undo();
        }
    }
}

fn all_cards(state: &GameState) -> Vec<Card> {
    let mut cards = Vec::new();
    for tableau in &state.tableaus {
        cards.extend(tableau.hidden().iter().copied());
        cards.extend(tableau.visible().iter().copied());
    }
    for pile in state.foundations.iter().chain([
        &state.stock,
        &state.waste,
        &state.discard,
        &state.holding,
    ]) {
        cards.extend(pile.iter().copied());
    }
    cards
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// A tableau takes a card of the other colour one rank lower, or a King when empty.
    #[test]
    fn prop_tableau_acceptance(top in test_gens::card(), card in test_gens::card()) {
        let pile = Pile::from_bottom_up(PileKind::Tableau, [top]);
        let expected = top.color() != card.color() && top.rank == card.rank + 1;
        prop_assert_eq!(pile.can_accept_card(&card), expected);

        let empty = Pile::new(PileKind::Tableau);
        prop_assert_eq!(empty.can_accept_card(&card), card.is_king());
    }

    /// A foundation takes the same suit one rank higher, or an Ace when empty.
    #[test]
    fn prop_foundation_acceptance(top in test_gens::card(), card in test_gens::card()) {
        let pile = Pile::from_bottom_up(PileKind::Foundation, [top]);
        let expected = top.suit == card.suit && card.rank == top.rank + 1;
        prop_assert_eq!(pile.can_accept_card(&card), expected);

        let empty = Pile::new(PileKind::Foundation);
        prop_assert_eq!(empty.can_accept_card(&card), card.is_ace());
    }

    /// Deal piles never take cards through the rules.
    #[test]
    fn prop_deal_piles_refuse_everything(card in test_gens::card()) {
        let mut pile = Pile::new(PileKind::Deal);
        prop_assert!(!pile.add(card));
        prop_assert!(pile.is_empty());
    }

    /// Every card of the deck stays on the table exactly once, whatever is played.
    #[test]
    fn prop_cards_are_conserved(
        scoring in test_gens::scoring_mode(),
        draw in test_gens::draw_mode(),
        actions in test_gens::actions(60),
    ) {
        let (mut game, _) = dealt_game(options(scoring, draw));
        for action in &actions {
            apply(&mut game, action);
            prop_assert!(game.holding().is_empty());
            let cards = all_cards(game.state());
            prop_assert_eq!(cards.len(), DECK_SIZE);
            let unique: HashSet<Card> = cards.into_iter().collect();
            prop_assert_eq!(unique.len(), DECK_SIZE);
        }
    }

    /// Picking cards up and dropping them back where they came from changes nothing.
    #[test]
    fn prop_release_onto_origin_restores_piles(
        flips in 0usize..10,
        from in test_gens::pile_id(),
        count in 1usize..=3,
    ) {
        let (mut game, _) = dealt_game(options(ScoringMode::Standard, DrawMode::Three));
        for _ in 0..flips {
            game.flip_hand();
        }
        let before = game.state().clone();
        let score = game.score();

        game.hold(from, count);
        game.release(Some(from));

        let after = game.state();
        prop_assert_eq!(&after.tableaus, &before.tableaus);
        prop_assert_eq!(&after.foundations, &before.foundations);
        prop_assert_eq!(&after.stock, &before.stock);
        prop_assert_eq!(&after.waste, &before.waste);
        prop_assert_eq!(&after.discard, &before.discard);
        prop_assert_eq!(game.score(), score);
    }

    /// Unwinding the whole history lands back on the deal.
    #[test]
    fn prop_undo_all_restores_the_deal(
        draw in test_gens::draw_mode(),
        actions in test_gens::actions(40),
    ) {
        let (mut game, _) = dealt_game(options(ScoringMode::Vegas, draw));
        let dealt = game.state().clone();
        for action in &actions {
            apply(&mut game, action);
        }
        while game.undo() {}
        prop_assert_eq!(game.state(), &dealt);
        prop_assert!(!game.undo());
    }
}

