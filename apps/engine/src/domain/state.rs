//! Engine state: table grid, game phase, and the full game container.

use serde::{Deserialize, Serialize};

use crate::domain::cards::Card;
use crate::domain::rules::TABLE_SLOTS;

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// A round is live: the table is dealt and accepting player actions.
    Playing,
    /// All four rounds complete. Terminal; only reset leaves this state.
    GameOver,
    /// The reshuffled pool could not fill a table. Terminal; reset required.
    DeckExhausted,
}

/// The 4x4 grid of card slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub slots: [Option<Card>; TABLE_SLOTS],
}

impl Table {
    pub fn empty() -> Self {
        Self {
            slots: [None; TABLE_SLOTS],
        }
    }

    pub fn card(&self, slot: usize) -> Option<Card> {
        self.slots[slot]
    }

    pub fn clear(&mut self, slot: usize) {
        self.slots[slot] = None;
    }

    /// Bulk fill from the front of a dealt deck.
    pub fn fill_from(&mut self, cards: &[Card]) {
        for (slot, card) in self.slots.iter_mut().zip(cards) {
            *slot = Some(*card);
        }
    }

    /// Cards still on the table, in slot order.
    pub fn cards(&self) -> Vec<Card> {
        self.slots.iter().flatten().copied().collect()
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True while any removable picture card sits on the table.
    pub fn has_picture(&self) -> bool {
        self.slots.iter().flatten().any(|card| card.is_picture())
    }
}

/// Entire game container, sufficient for pure domain operations.
///
/// Independently constructible with no dependency on any UI toolkit; the
/// presentation layer holds no authoritative copy of anything in here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Current phase.
    pub phase: Phase,
    /// Round number, 1-based; `MAX_ROUNDS + 1` once the game is over.
    pub round_no: u8,
    /// Picture cards removed so far across the whole game.
    pub removed_total: u8,
    /// Deck ordering for the current round; rebuilt on every transition.
    pub deck: Vec<Card>,
    /// How many deck entries have been placed on the table this round;
    /// `deck[draw_ptr..]` is the undrawn reserve.
    pub draw_ptr: usize,
    /// The 16-slot grid.
    pub table: Table,
    /// Slots whose removal transition has started but not yet completed.
    pub pending: [bool; TABLE_SLOTS],
}

impl GameState {
    /// Fresh pre-deal state over an already shuffled deck.
    pub fn new(deck: Vec<Card>) -> Self {
        Self {
            phase: Phase::Playing,
            round_no: 1,
            removed_total: 0,
            deck,
            draw_ptr: 0,
            table: Table::empty(),
            pending: [false; TABLE_SLOTS],
        }
    }

    /// True while player actions are accepted.
    pub fn round_active(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// The undrawn remainder of the deck for this round.
    pub fn reserve(&self) -> &[Card] {
        &self.deck[self.draw_ptr..]
    }
}
