//! Domain-level error type used across the engine.
//!
//! Expected game situations (clicking an empty slot, advancing with pictures
//! still on the table, running the deck dry) are not errors; they surface as
//! `GameEvent`s. `DomainError` is reserved for calls a correctly wired
//! presentation layer never makes.

use thiserror::Error;

/// Validation kinds to distinguish caller mistakes
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Slot index outside the 16-slot table
    InvalidSlotIndex,
    /// Card identity outside [0,52)
    InvalidCardIndex,
    /// Completion reported for a slot with no removal in progress
    RemovalNotPending,
    /// Operation not valid in the current phase
    PhaseMismatch,
    /// Card token could not be parsed
    ParseCard,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Input validation or rule violation by the caller
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn kind(&self) -> &ValidationKind {
        match self {
            DomainError::Validation(kind, _) => kind,
        }
    }
}
