//! One of the seven playing columns: a face-down pile under a face-up pile.

use super::cards_types::Card;
use super::pile::{Pile, PileKind};

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Tableau {
    hidden: Pile,
    visible: Pile,
}

impl Default for Tableau {
    fn default() -> Self {
        Self {
            hidden: Pile::new(PileKind::Tableau),
            visible: Pile::new(PileKind::Tableau),
        }
    }
}

impl Tableau {
    /// Deal `count` cards off the top of `stock` face down, then turn the top one up.
    pub fn deal(count: usize, stock: &mut Pile) -> Self {
        let mut tableau = Self::default();
        for _ in 0..count {
            let Some(card) = stock.remove_top() else {
                break;
            };
            tableau.hidden.force_add(card);
        }
        tableau.flip_over_card();
        tableau
    }

    /// Build a column directly from face-down and face-up cards, each bottom to top.
    pub fn from_parts<H, V>(hidden: H, visible: V) -> Self
    where
        H: IntoIterator<Item = Card>,
        V: IntoIterator<Item = Card>,
    {
        Self {
            hidden: Pile::from_bottom_up(PileKind::Tableau, hidden),
            visible: Pile::from_bottom_up(PileKind::Tableau, visible),
        }
    }

    pub fn hidden(&self) -> &Pile {
        &self.hidden
    }

    pub fn visible(&self) -> &Pile {
        &self.visible
    }

    pub(crate) fn visible_mut(&mut self) -> &mut Pile {
        &mut self.visible
    }

    pub fn height(&self) -> usize {
        self.hidden.height() + self.visible.height()
    }

    /// No face-up card left but face-down cards remain.
    pub fn needs_flip(&self) -> bool {
        self.visible.is_empty() && !self.hidden.is_empty()
    }

    /// Turn the top hidden card face up when the visible pile has run out.
    pub fn flip_over_card(&mut self) -> bool {
        if !self.needs_flip() {
            return false;
        }
        match self.hidden.remove_top() {
            Some(card) => {
                self.visible.force_add(card);
                true
            }
            None => false,
        }
    }
}
