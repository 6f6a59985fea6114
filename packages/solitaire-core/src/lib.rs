//! Klondike solitaire rules and game state.
//!
//! The crate has no I/O: a renderer or input layer drives a
//! [`Solitaire`](domain::Solitaire) through its hold/release and flip
//! transitions and reads piles, score and time back out.

pub mod config;
pub mod domain;
pub mod errors;

pub use config::GameOptions;
pub use domain::{
    Card, DrawMode, GameSnapshot, PileId, ReleaseOutcome, ScoringMode, Solitaire,
};
pub use errors::{DomainError, ValidationKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
