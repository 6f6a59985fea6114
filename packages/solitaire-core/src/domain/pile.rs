//! Ordered card piles and the stacking rules that tell them apart.
//!
//! Every pile in the game is the same ordered sequence; the only difference
//! between a tableau column, a foundation and the stock is which cards they
//! accept through [`Pile::add`] and [`Pile::add_all`]. That predicate is a
//! pure function of [`PileKind`].
//!
//! The front of the sequence is the *top* (most recently added, first
//! removable); the back is the *bottom*.

use std::collections::VecDeque;

use super::cards_types::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PileKind {
    /// Cascade: King on empty, otherwise alternating colour, one rank lower.
    Tableau,
    /// Same suit ascending from Ace, one card at a time.
    Foundation,
    /// Stock, waste and discard: never accepts cards through the rules.
    Deal,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Pile {
    kind: PileKind,
    cards: VecDeque<Card>,
}

impl Pile {
    pub fn new(kind: PileKind) -> Self {
        Self {
            kind,
            cards: VecDeque::new(),
        }
    }

    /// Build a pile from cards listed bottom to top.
    pub fn from_bottom_up<I>(kind: PileKind, cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut pile = Self::new(kind);
        for card in cards {
            pile.force_add(card);
        }
        pile
    }

    /// Lift up to `count` cards off the top of `source` into a new pile.
    ///
    /// Relative order is kept: the source's top card becomes the new pile's top.
    pub fn split_from(kind: PileKind, source: &mut Pile, count: usize) -> Self {
        let take = count.min(source.height());
        let cards = source.cards.drain(..take).collect();
        Self { kind, cards }
    }

    pub fn kind(&self) -> PileKind {
        self.kind
    }

    pub fn height(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    pub fn bottom(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    pub fn remove_top(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn remove_bottom(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Cards from top to bottom.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Cards from bottom to top (the order a renderer lays them out).
    pub fn iter_bottom_up(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().rev()
    }

    pub fn can_accept_card(&self, card: &Card) -> bool {
        match self.kind {
            PileKind::Tableau => match self.top() {
                None => card.is_king(),
                Some(top) => top.is_alternate_color(card) && top.is_ranked_one_above(card),
            },
            PileKind::Foundation => match self.top() {
                None => card.is_ace(),
                Some(top) => top.suit == card.suit && top.is_ranked_one_below(card),
            },
            PileKind::Deal => false,
        }
    }

    /// Whether a whole sub-pile may be dropped here.
    ///
    /// Tableau piles judge a sub-pile by its bottom card; the sub-pile itself
    /// is assumed to be a valid run already.
    pub fn can_accept_pile(&self, other: &Pile) -> bool {
        match self.kind {
            PileKind::Tableau => other
                .bottom()
                .is_some_and(|bottom| self.can_accept_card(&bottom)),
            PileKind::Foundation | PileKind::Deal => false,
        }
    }

    /// Push onto the top, bypassing the rules (dealing, flipping, undoing a drop).
    pub fn force_add(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    pub fn add(&mut self, card: Card) -> bool {
        if !self.can_accept_card(&card) {
            return false;
        }
        self.cards.push_front(card);
        true
    }

    /// Drain `other` onto this pile's top, bottom card first, ignoring the rules.
    pub fn force_add_all(&mut self, other: &mut Pile) {
        while let Some(card) = other.remove_bottom() {
            self.cards.push_front(card);
        }
    }

    /// Move all of `other` onto this pile if the rules allow it.
    ///
    /// A single card goes through [`Pile::add`], so foundations can still take
    /// one card at a time. Both piles are unchanged when this returns false.
    pub fn add_all(&mut self, other: &mut Pile) -> bool {
        if other.height() == 1 {
            let Some(card) = other.top() else {
                return false;
            };
            if !self.add(card) {
                return false;
            }
            other.clear();
            return true;
        }
        if !self.can_accept_pile(other) {
            return false;
        }
        self.force_add_all(other);
        true
    }
}
