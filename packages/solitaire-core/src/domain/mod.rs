//! Domain layer: cards, piles, rules and the game controller.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod clock;
pub mod dealing;
pub mod pile;
pub mod seed_derivation;
pub mod tableau;

pub mod game;
pub mod history;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests_props_piles;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_undo;

// Re-exports for ergonomics
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Color, Suit};
pub use clock::{Clock, ManualClock, SystemClock};
pub use dealing::{shuffled_deck, DECK_SIZE};
pub use game::{ReleaseOutcome, Solitaire};
pub use pile::{Pile, PileKind};
pub use rules::{DrawMode, PileId};
pub use scoring::ScoringMode;
pub use seed_derivation::{preset_seed, seed_label, PRESET_SEEDS};
pub use snapshot::GameSnapshot;
pub use tableau::Tableau;
