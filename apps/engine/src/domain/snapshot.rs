//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::cards::Card;
use crate::domain::rules::{MAX_ROUNDS, TABLE_SLOTS};
use crate::domain::state::{GameState, Phase};

/// Point-in-time view of the game for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub round_no: u8,
    pub removed_total: u8,
    pub round_active: bool,
    pub phase: Phase,
    pub slots: [Option<Card>; TABLE_SLOTS],
    /// Undrawn cards left in the deck this round.
    pub reserve: usize,
}

/// Entry point: produce a snapshot of the current state. Never panics.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    GameSnapshot {
        round_no: state.round_no,
        removed_total: state.removed_total,
        round_active: state.round_active(),
        phase: state.phase,
        slots: state.table.slots,
        reserve: state.deck.len().saturating_sub(state.draw_ptr),
    }
}

/// Header line for the presentation.
pub fn status_line(state: &GameState) -> String {
    format!(
        "Round {}/{} — Pictures removed: {}",
        state.round_no, MAX_ROUNDS, state.removed_total
    )
}
