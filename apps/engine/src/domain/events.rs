//! Notifications the engine emits for a presentation layer to render.
//!
//! The engine owns all authoritative state; these events are the only
//! outbound contract. They serialize as an adjacently tagged union so any
//! host (GUI, terminal, test harness) can consume them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::cards::Card;
use crate::domain::rules::TABLE_SLOTS;

/// Why a round advance was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RejectReason {
    FaceCardsRemain,
}

impl RejectReason {
    /// Canonical warning text for the player.
    pub fn user_message(self) -> &'static str {
        match self {
            RejectReason::FaceCardsRemain => {
                "You must remove all J, Q, and K cards before moving to the next round."
            }
        }
    }
}

/// Extra information attached to a status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusNote {
    /// No picture card left on the table this round.
    TableCleared,
    NewRound,
    GameOver,
    DeckExhausted,
}

impl fmt::Display for StatusNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StatusNote::TableCleared => "No more J/Q/K on table",
            StatusNote::NewRound => "New round started",
            StatusNote::GameOver => "Game over",
            StatusNote::DeckExhausted => "Deck exhausted",
        };
        f.write_str(text)
    }
}

/// Player-facing warning for the deck-exhausted terminal state.
pub const DECK_EXHAUSTED_WARNING: &str =
    "Deck Exhausted — not enough cards to start a new round";

/// Adjacently tagged union of engine notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum GameEvent {
    /// Full table contents after any slot change.
    TableUpdated { slots: [Option<Card>; TABLE_SLOTS] },
    /// Header line data; `message` carries clears and round transitions.
    StatusChanged {
        round_no: u8,
        removed_total: u8,
        message: Option<StatusNote>,
    },
    /// A removal transition should start on this slot.
    RemovalStarted { slot: usize },
    /// The slot is now empty.
    RemovalFinished { slot: usize },
    /// Advance refused; nothing changed.
    RoundRejected { reason: RejectReason },
    /// Terminal: all rounds played.
    GameOver { won: bool, removed_total: u8 },
    /// Terminal: the reshuffled pool cannot fill a table.
    DeckExhausted,
}
