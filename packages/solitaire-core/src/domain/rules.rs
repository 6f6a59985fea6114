//! Table geometry and the pile index space shared with the UI layer.
//!
//! Piles are addressed by a small integer on the UI side: 0–6 are tableau
//! columns, 7–10 foundations, 11 the waste and 12 a sentinel for "the stock
//! was clicked". `-1` means the pointer is over no pile. The bands are ordered
//! and [`PileId`]'s derived ordering keeps that order.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

pub const TABLEAU_COUNT: usize = 7;
pub const FOUNDATION_COUNT: usize = 4;
pub const CARDS_PER_SUIT: usize = 13;

pub const FOUNDATION_COLUMN_BASE: i32 = 7;
pub const HAND_COLUMN_BASE: i32 = 11;
pub const DRAW_PILE_BASE: i32 = 12;
pub const NO_COLUMN: i32 = -1;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PileId {
    Tableau(usize),
    Foundation(usize),
    /// The face-up drawn cards; only its top card can be picked up.
    Waste,
    /// Not a destination: stands for a click on the stock.
    Stock,
}

impl PileId {
    /// UI-side index of this pile.
    pub fn index(self) -> i32 {
        match self {
            PileId::Tableau(i) => i as i32,
            PileId::Foundation(i) => FOUNDATION_COLUMN_BASE + i as i32,
            PileId::Waste => HAND_COLUMN_BASE,
            PileId::Stock => DRAW_PILE_BASE,
        }
    }

    /// Like `try_from`, but maps [`NO_COLUMN`] to `None`.
    pub fn from_wire(index: i32) -> Result<Option<Self>, DomainError> {
        if index == NO_COLUMN {
            return Ok(None);
        }
        Self::try_from(index).map(Some)
    }

    pub fn is_foundation(self) -> bool {
        matches!(self, PileId::Foundation(_))
    }

    /// Waste or the stock sentinel.
    pub fn is_hand(self) -> bool {
        matches!(self, PileId::Waste | PileId::Stock)
    }
}

impl TryFrom<i32> for PileId {
    type Error = DomainError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        match index {
            0..=6 => Ok(PileId::Tableau(index as usize)),
            7..=10 => Ok(PileId::Foundation((index - FOUNDATION_COLUMN_BASE) as usize)),
            HAND_COLUMN_BASE => Ok(PileId::Waste),
            DRAW_PILE_BASE => Ok(PileId::Stock),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidPileIndex,
                format!("Pile index must be 0..=12, got {index}"),
            )),
        }
    }
}

/// How many stock cards one click turns over.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    One,
    Three,
}

impl DrawMode {
    pub fn count(self) -> usize {
        match self {
            Self::One => 1,
            Self::Three => 3,
        }
    }

    pub fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Self::One),
            3 => Some(Self::Three),
            _ => None,
        }
    }

    /// Recycles allowed under Vegas rules before the stock is closed.
    pub fn recycle_cap(self) -> u32 {
        match self {
            Self::One => 0,
            Self::Three => 2,
        }
    }
}

impl TryFrom<u8> for DrawMode {
    type Error = DomainError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        Self::from_count(count).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidDrawCount,
                format!("Draw count must be 1 or 3, got {count}"),
            )
        })
    }
}
