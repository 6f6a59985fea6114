//! Read-only, serializable view of a game for renderers and logs.
//!
//! Face-down cards are reported as counts only, so a snapshot never leaks the
//! deal order.

use serde::{Deserialize, Serialize};

use super::cards_types::Card;
use super::game::Solitaire;
use super::pile::Pile;
use super::rules::{DrawMode, FOUNDATION_COUNT, TABLEAU_COUNT};
use super::scoring::ScoringMode;
use super::tableau::Tableau;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableauSnapshot {
    pub hidden: usize,
    /// Face-up cards, bottom to top.
    pub visible: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationSnapshot {
    pub top: Option<Card>,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub seed: u64,
    pub scoring: ScoringMode,
    pub draw: DrawMode,
    pub tableaus: Vec<TableauSnapshot>,
    pub foundations: Vec<FoundationSnapshot>,
    pub stock: usize,
    /// Face-up drawn cards, bottom to top.
    pub waste: Vec<Card>,
    pub discard: usize,
    pub holding: Vec<Card>,
    pub score: i32,
    pub time_secs: u32,
    pub won: bool,
    pub can_undo: bool,
    pub can_flip_hand: bool,
    pub resets: u32,
    pub undo_count: u32,
}

fn bottom_up(pile: &Pile) -> Vec<Card> {
    pile.iter_bottom_up().copied().collect()
}

impl From<&Tableau> for TableauSnapshot {
    fn from(tableau: &Tableau) -> Self {
        Self {
            hidden: tableau.hidden().height(),
            visible: bottom_up(tableau.visible()),
        }
    }
}

impl From<&Pile> for FoundationSnapshot {
    fn from(pile: &Pile) -> Self {
        Self {
            top: pile.top(),
            height: pile.height(),
        }
    }
}

impl Solitaire {
    /// Capture the table as it stands, settling due time penalties first.
    pub fn snapshot(&mut self) -> GameSnapshot {
        let score = self.score();
        GameSnapshot {
            seed: self.seed(),
            scoring: self.scoring_mode(),
            draw: self.draw_mode(),
            tableaus: (0..TABLEAU_COUNT)
                .filter_map(|i| self.tableau(i))
                .map(TableauSnapshot::from)
                .collect(),
            foundations: (0..FOUNDATION_COUNT)
                .filter_map(|i| self.foundation(i))
                .map(FoundationSnapshot::from)
                .collect(),
            stock: self.stock().height(),
            waste: bottom_up(self.waste()),
            discard: self.discard().height(),
            holding: bottom_up(self.holding()),
            score,
            time_secs: self.time_secs(),
            won: self.is_won(),
            can_undo: self.can_undo(),
            can_flip_hand: self.can_flip_hand(),
            resets: self.resets(),
            undo_count: self.undo_count(),
        }
    }
}
