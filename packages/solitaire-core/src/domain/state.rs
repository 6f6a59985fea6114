//! Everything an undo restores: the piles plus the scalar move state.

use super::pile::{Pile, PileKind};
use super::rules::{PileId, CARDS_PER_SUIT, FOUNDATION_COUNT, TABLEAU_COUNT};
use super::scoring::ScoreBoard;
use super::tableau::Tableau;

/// Table layout and move bookkeeping for one deal.
///
/// Cloning copies every pile's storage, so a clone shares nothing with the
/// live state; the undo history relies on that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) tableaus: [Tableau; TABLEAU_COUNT],
    pub(crate) foundations: [Pile; FOUNDATION_COUNT],
    pub(crate) stock: Pile,
    /// Face-up drawn cards (up to the draw count).
    pub(crate) waste: Pile,
    /// Drawn cards that have been covered by a later draw.
    pub(crate) discard: Pile,
    /// Cards picked up between `hold` and `release`.
    pub(crate) holding: Pile,
    pub(crate) hold_origin: Option<PileId>,
    /// Epoch millis of the first move; `None` until the player acts.
    pub(crate) first_move_at: Option<i64>,
    pub(crate) won_at_secs: Option<u32>,
    pub(crate) board: ScoreBoard,
    /// Times the stock has been recycled from the discard pile.
    pub(crate) resets: u32,
}

impl GameState {
    /// Shuffle a deck from `seed` and lay out the seven columns (1..=7 cards).
    pub(crate) fn deal(seed: u64, initial_score: i32) -> Self {
        let mut stock = Pile::new(PileKind::Deal);
        stock.fill(seed);
        let tableaus = std::array::from_fn(|i| Tableau::deal(i + 1, &mut stock));

        Self {
            tableaus,
            foundations: std::array::from_fn(|_| Pile::new(PileKind::Foundation)),
            stock,
            waste: Pile::new(PileKind::Deal),
            discard: Pile::new(PileKind::Deal),
            holding: Pile::new(PileKind::Tableau),
            hold_origin: None,
            first_move_at: None,
            won_at_secs: None,
            board: ScoreBoard::new(initial_score),
            resets: 0,
        }
    }

    /// An empty table, for building positions by hand.
    #[cfg(test)]
    pub(crate) fn empty(initial_score: i32) -> Self {
        Self {
            tableaus: std::array::from_fn(|_| Tableau::default()),
            foundations: std::array::from_fn(|_| Pile::new(PileKind::Foundation)),
            stock: Pile::new(PileKind::Deal),
            waste: Pile::new(PileKind::Deal),
            discard: Pile::new(PileKind::Deal),
            holding: Pile::new(PileKind::Tableau),
            hold_origin: None,
            first_move_at: None,
            won_at_secs: None,
            board: ScoreBoard::new(initial_score),
            resets: 0,
        }
    }

    pub(crate) fn all_foundations_complete(&self) -> bool {
        self.foundations
            .iter()
            .all(|f| f.height() == CARDS_PER_SUIT)
    }

    /// Cards anywhere on the table, including any in hand.
    pub(crate) fn card_count(&self) -> usize {
        self.tableaus.iter().map(Tableau::height).sum::<usize>()
            + self.foundations.iter().map(Pile::height).sum::<usize>()
            + self.stock.height()
            + self.waste.height()
            + self.discard.height()
            + self.holding.height()
    }
}
