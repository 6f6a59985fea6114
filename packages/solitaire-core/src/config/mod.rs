//! Configuration for a game of solitaire.

pub mod options;

pub use options::GameOptions;
