//! Game options: scoring, timing, draw mode and deal seed.
//!
//! Options can be built in code, deserialized, or loaded from `SOLITAIRE_*`
//! environment variables. Unset variables keep the defaults; a variable that
//! is set but malformed is an error rather than being ignored.

use std::env;

use serde::{Deserialize, Serialize};

use crate::domain::rules::DrawMode;
use crate::domain::scoring::{ScoringMode, VEGAS_STAKE};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    pub scoring: ScoringMode,
    /// Standard-mode time penalties and win bonus.
    pub timed: bool,
    pub draw: DrawMode,
    /// Carry the Vegas bankroll from one deal into the next.
    pub cumulative: bool,
    /// Fixed deal; `None` derives one from the clock.
    pub seed: Option<u64>,
    pub initial_score: i32,
    /// Cap on undo history depth; `None` keeps every move.
    pub undo_limit: Option<usize>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            scoring: ScoringMode::Standard,
            timed: true,
            draw: DrawMode::Three,
            cumulative: false,
            seed: None,
            initial_score: 0,
            undo_limit: None,
        }
    }
}

impl GameOptions {
    /// Load options from the environment.
    ///
    /// Recognised variables: `SOLITAIRE_SCORING` (`standard|vegas|none`),
    /// `SOLITAIRE_TIMED` and `SOLITAIRE_CUMULATIVE` (`true|false|1|0`),
    /// `SOLITAIRE_DRAW` (`1|3`), `SOLITAIRE_SEED` (decimal or `0x` hex),
    /// `SOLITAIRE_UNDO_LIMIT` (positive integer).
    pub fn from_env() -> Result<Self, DomainError> {
        let mut opts = Self::default();

        if let Some(raw) = var("SOLITAIRE_SCORING") {
            opts.scoring = raw.parse().map_err(|_| {
                DomainError::config(format!("SOLITAIRE_SCORING: invalid mode '{raw}'"))
            })?;
        }
        if let Some(raw) = var("SOLITAIRE_TIMED") {
            opts.timed = parse_bool("SOLITAIRE_TIMED", &raw)?;
        }
        if let Some(raw) = var("SOLITAIRE_CUMULATIVE") {
            opts.cumulative = parse_bool("SOLITAIRE_CUMULATIVE", &raw)?;
        }
        if let Some(raw) = var("SOLITAIRE_DRAW") {
            opts.draw = raw
                .parse::<u8>()
                .ok()
                .and_then(DrawMode::from_count)
                .ok_or_else(|| {
                    DomainError::config(format!("SOLITAIRE_DRAW must be 1 or 3, got '{raw}'"))
                })?;
        }
        if let Some(raw) = var("SOLITAIRE_SEED") {
            opts.seed = Some(parse_seed(&raw)?);
        }
        if let Some(raw) = var("SOLITAIRE_UNDO_LIMIT") {
            let limit = raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    DomainError::config(format!(
                        "SOLITAIRE_UNDO_LIMIT must be a positive integer, got '{raw}'"
                    ))
                })?;
            opts.undo_limit = Some(limit);
        }

        Ok(opts)
    }

    /// Starting score of a new deal that follows a game ending on `previous`.
    ///
    /// Vegas charges the $52 stake, against the carried bankroll when scoring
    /// is cumulative. Other modes start from zero.
    pub fn initial_score_after(&self, previous: i32) -> i32 {
        match self.scoring {
            ScoringMode::Vegas if self.cumulative => previous - VEGAS_STAKE,
            ScoringMode::Vegas => -VEGAS_STAKE,
            ScoringMode::Standard | ScoringMode::None => 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Read a variable, treating unset and blank the same.
fn var(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, DomainError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(DomainError::config(format!(
            "{name} must be a boolean, got '{raw}'"
        ))),
    }
}

fn parse_seed(raw: &str) -> Result<u64, DomainError> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => raw.parse::<u64>(),
    };
    parsed.map_err(|_| DomainError::config(format!("SOLITAIRE_SEED is not a valid seed: '{raw}'")))
}
