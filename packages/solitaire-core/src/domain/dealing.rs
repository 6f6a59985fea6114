//! Deterministic deck generation and shuffling for the stock.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::cards_types::{Card, Suit, RANK_ACE, RANK_KING};
use super::pile::{Pile, PileKind};

pub const DECK_SIZE: usize = 52;

/// Generate a full 52-card deck, rank by rank.
fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in RANK_ACE..=RANK_KING {
        for suit in [Suit::Clubs, Suit::Spades, Suit::Diamonds, Suit::Hearts] {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// A full deck permuted by a Fisher-Yates shuffle seeded from `seed`.
///
/// ChaCha8 is used rather than `StdRng` because its output stream is fixed
/// across rand releases and platforms, so preset seeds keep dealing the same
/// game.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

impl Pile {
    /// Replace the contents with a freshly shuffled 52-card deck.
    pub fn fill(&mut self, seed: u64) {
        debug_assert_eq!(self.kind(), PileKind::Deal, "only deal piles are filled");
        *self = Pile::from_bottom_up(self.kind(), shuffled_deck(seed));
    }
}
