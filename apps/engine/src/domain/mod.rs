//! Domain layer: pure game logic types and helpers.

pub mod cards;
pub mod cards_parsing;
pub mod dealing;
pub mod events;
pub mod fixtures;
pub mod round_flow;
pub mod rules;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_flow;
#[cfg(test)]
mod tests_round_advance;

// Re-exports for ergonomics
pub use cards::{Card, Rank, Suit};
pub use cards_parsing::try_parse_cards;
pub use dealing::{fresh_deck, shuffle_with_seed, DeckShuffler, SeededShuffler};
pub use events::{GameEvent, RejectReason, StatusNote};
pub use round_flow::{advance_round, begin_removal, can_advance, complete_removal, deal, reset};
pub use rules::{DECK_SIZE, MAX_ROUNDS, PICTURE_CARD_COUNT, TABLE_SLOTS};
pub use seed_derivation::derive_shuffle_seed;
pub use snapshot::{snapshot, status_line, GameSnapshot};
pub use state::{GameState, Phase, Table};
