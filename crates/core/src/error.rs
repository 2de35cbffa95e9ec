//! Domain error model.

use thiserror::Error;

use crate::id::PlayId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. IO and
/// decoding failures belong to the caller that loads the inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A play's category has no pricing formula.
    #[error("unknown type: {category}")]
    UnrecognizedCategory { category: String },

    /// A performance references a play that is missing from the catalog.
    #[error("unknown play: {play_id}")]
    UnknownPlay { play_id: PlayId },

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn unrecognized_category(category: impl Into<String>) -> Self {
        Self::UnrecognizedCategory {
            category: category.into(),
        }
    }

    pub fn unknown_play(play_id: PlayId) -> Self {
        Self::UnknownPlay { play_id }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
