#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use domain::cards::{Card, Rank, Suit};
pub use domain::dealing::{DeckShuffler, SeededShuffler};
pub use domain::events::{GameEvent, RejectReason, StatusNote};
pub use domain::rules::{MAX_ROUNDS, PICTURE_CARD_COUNT, TABLE_SLOTS};
pub use domain::snapshot::GameSnapshot;
pub use domain::state::{GameState, Phase, Table};
pub use errors::domain::{DomainError, ValidationKind};
pub use services::round_engine::RoundEngine;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
