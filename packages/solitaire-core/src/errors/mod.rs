//! Error handling for the solitaire core.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
