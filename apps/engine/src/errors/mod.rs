//! Error types for the round engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
