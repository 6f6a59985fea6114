//! Score keeping for the three scoring modes.
//!
//! Standard scoring follows the classic Windows rules (points per move, a
//! 2-point penalty every 10 seconds, a time bonus on winning) and never drops
//! below zero. Vegas scoring is a bankroll: $5 per card on a foundation, and
//! it may go negative. With scoring off nothing is tracked.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::rules::DrawMode;
use crate::errors::domain::{DomainError, ValidationKind};

pub const TIME_PENALTY_INTERVAL_SECS: u32 = 10;
pub const TIME_PENALTY_POINTS: i32 = 2;
pub const VEGAS_STAKE: i32 = 52;
pub const MIN_SECS_FOR_TIME_BONUS: u32 = 30;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    #[default]
    Standard,
    Vegas,
    None,
}

impl FromStr for ScoringMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(ScoringMode::Standard),
            "vegas" => Ok(ScoringMode::Vegas),
            "none" => Ok(ScoringMode::None),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidScoringMode,
                format!("Unknown scoring mode: {s}"),
            )),
        }
    }
}

impl ScoringMode {
    /// Card played onto a foundation from the tableau or the waste.
    pub fn to_foundation(self) -> i32 {
        match self {
            ScoringMode::Standard => 10,
            ScoringMode::Vegas => 5,
            ScoringMode::None => 0,
        }
    }

    pub fn waste_to_tableau(self) -> i32 {
        match self {
            ScoringMode::Standard => 5,
            ScoringMode::Vegas | ScoringMode::None => 0,
        }
    }

    pub fn foundation_to_tableau(self) -> i32 {
        match self {
            ScoringMode::Standard => -15,
            ScoringMode::Vegas => -5,
            ScoringMode::None => 0,
        }
    }

    pub fn turn_over_tableau_card(self) -> i32 {
        match self {
            ScoringMode::Standard => 5,
            ScoringMode::Vegas | ScoringMode::None => 0,
        }
    }

    /// Penalty for the `resets`-th recycle of the stock (1-based).
    pub fn recycle_penalty(self, draw: DrawMode, resets: u32) -> i32 {
        match (self, draw) {
            (ScoringMode::Standard, DrawMode::Three) if resets >= 4 => -20,
            (ScoringMode::Standard, DrawMode::Three) => 0,
            (ScoringMode::Standard, DrawMode::One) => -100,
            (ScoringMode::Vegas | ScoringMode::None, _) => 0,
        }
    }

    /// Bonus for winning in `win_secs` seconds after `undos` undos.
    ///
    /// `(20000 / secs) * 35`, divided by `undos + 1`; nothing under 30 seconds.
    pub fn win_bonus(self, win_secs: u32, undos: u32) -> i32 {
        if self != ScoringMode::Standard || win_secs < MIN_SECS_FOR_TIME_BONUS {
            return 0;
        }
        let bonus = (20_000 / win_secs) * 35 / (undos + 1);
        bonus as i32
    }
}

/// Running score plus the anchor for lazily applied time penalties.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct ScoreBoard {
    score: i32,
    penalty_anchor: u32,
}

impl ScoreBoard {
    pub fn new(initial: i32) -> Self {
        Self {
            score: initial,
            penalty_anchor: 0,
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Elapsed second up to which time penalties have been charged.
    pub fn penalty_anchor(&self) -> u32 {
        self.penalty_anchor
    }

    /// Add `amount`; Standard scores are floored at zero and unscored games ignore it.
    pub fn change(&mut self, mode: ScoringMode, amount: i32) {
        match mode {
            ScoringMode::None => {}
            ScoringMode::Standard => self.score = (self.score + amount).max(0),
            ScoringMode::Vegas => self.score += amount,
        }
    }

    /// Add a bonus without the Standard floor (bonuses are never negative).
    pub fn add_bonus(&mut self, bonus: i32) {
        self.score += bonus;
    }

    /// Charge every 10-second penalty that has come due by `elapsed_secs`.
    ///
    /// The anchor moves in exact 10-second steps, so a late settlement charges
    /// the same penalties as a punctual one. Returns the number charged.
    pub fn settle_time_penalties(
        &mut self,
        mode: ScoringMode,
        timed: bool,
        elapsed_secs: u32,
    ) -> u32 {
        if mode != ScoringMode::Standard || !timed {
            return 0;
        }
        let mut charged = 0;
        while elapsed_secs.saturating_sub(self.penalty_anchor) >= TIME_PENALTY_INTERVAL_SECS {
            self.change(mode, -TIME_PENALTY_POINTS);
            self.penalty_anchor += TIME_PENALTY_INTERVAL_SECS;
            charged += 1;
        }
        charged
    }
}
