//! Core card-related types: Card, Suit, Color

use crate::errors::domain::{DomainError, ValidationKind};

pub const RANK_ACE: u8 = 1;
pub const RANK_JACK: u8 = 11;
pub const RANK_QUEEN: u8 = 12;
pub const RANK_KING: u8 = 13;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// A playing card. Plain value; copied freely and never mutated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    /// 1 (Ace) ..= 13 (King)
    pub rank: u8,
}

impl Card {
    pub fn new(suit: Suit, rank: u8) -> Self {
        debug_assert!(
            (RANK_ACE..=RANK_KING).contains(&rank),
            "rank {rank} out of range"
        );
        Self { suit, rank }
    }

    /// Checked constructor for ranks coming from outside the crate.
    pub fn try_new(suit: Suit, rank: u8) -> Result<Self, DomainError> {
        if !(RANK_ACE..=RANK_KING).contains(&rank) {
            return Err(DomainError::validation(
                ValidationKind::InvalidRank,
                format!("Rank must be {RANK_ACE}..={RANK_KING}, got {rank}"),
            ));
        }
        Ok(Self { suit, rank })
    }

    pub fn is_ace(&self) -> bool {
        self.rank == RANK_ACE
    }

    pub fn is_king(&self) -> bool {
        self.rank == RANK_KING
    }
}
