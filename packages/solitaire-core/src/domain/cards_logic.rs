//! Card comparison helpers used by the stacking rules

use super::cards_types::{Card, Color};

impl Card {
    pub fn color(&self) -> Color {
        self.suit.color()
    }

    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    pub fn is_alternate_color(&self, other: &Card) -> bool {
        self.color() != other.color()
    }

    /// True when `self` is exactly one rank above `other` (e.g. 7 over 6).
    pub fn is_ranked_one_above(&self, other: &Card) -> bool {
        self.rank == other.rank + 1
    }

    /// True when `self` is exactly one rank below `other` (e.g. 6 under 7).
    pub fn is_ranked_one_below(&self, other: &Card) -> bool {
        self.rank + 1 == other.rank
    }
}
