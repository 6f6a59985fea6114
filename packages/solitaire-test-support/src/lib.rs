//! Solitaire test support utilities
//!
//! Shared helpers for the core crate's integration tests. Kept free of any
//! dependency on `solitaire-core` so it can be a dev-dependency without
//! duplicating the core's types.

pub mod logging;
