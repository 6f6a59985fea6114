//! Domain-level error type.
//!
//! Rule outcomes (an illegal drop, a refused recycle) are never errors: the
//! controller reports them as booleans or [`ReleaseOutcome`] values. This type
//! only covers the fallible edges of the crate: parsing text into cards or
//! pile indices, and reading configuration.
//!
//! [`ReleaseOutcome`]: crate::domain::game::ReleaseOutcome

use thiserror::Error;

/// Validation error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    ParseCard,
    InvalidRank,
    InvalidPileIndex,
    InvalidDrawCount,
    InvalidScoringMode,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input that does not describe a valid card, pile or option value
    #[error("validation error ({0:?}): {1}")]
    Validation(ValidationKind, String),
    /// Malformed configuration value
    #[error("configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    /// Validation kind, if this is a validation error.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::Config(_) => None,
        }
    }
}
