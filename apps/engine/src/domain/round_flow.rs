//! Round lifecycle and removal mutations over `GameState`.
//!
//! Every operation returns the events the presentation should render.
//! Expected game situations surface as events or silent no-ops; a
//! `DomainError` marks a malformed call.

use crate::domain::dealing::{fresh_deck, DeckShuffler};
use crate::domain::events::{GameEvent, RejectReason, StatusNote};
use crate::domain::rules::{all_rounds_complete, PICTURE_CARD_COUNT, TABLE_SLOTS};
use crate::domain::state::{GameState, Phase, Table};
use crate::errors::domain::{DomainError, ValidationKind};

fn require_slot(slot: usize) -> Result<(), DomainError> {
    if slot >= TABLE_SLOTS {
        return Err(DomainError::validation(
            ValidationKind::InvalidSlotIndex,
            format!("Slot must be in [0,{TABLE_SLOTS}), got {slot}"),
        ));
    }
    Ok(())
}

fn table_updated(state: &GameState) -> GameEvent {
    GameEvent::TableUpdated {
        slots: state.table.slots,
    }
}

fn status_changed(state: &GameState, message: Option<StatusNote>) -> GameEvent {
    GameEvent::StatusChanged {
        round_no: state.round_no,
        removed_total: state.removed_total,
        message,
    }
}

fn fill_table(state: &mut GameState) {
    state.table.fill_from(&state.deck[..TABLE_SLOTS]);
    state.draw_ptr = TABLE_SLOTS;
    state.pending = [false; TABLE_SLOTS];
}

/// Fill the table from the front of the deck and open the round.
///
/// The initial deal and every redeal share this path; both draw
/// `deck[0..TABLE_SLOTS)`.
pub fn deal(state: &mut GameState) -> Result<Vec<GameEvent>, DomainError> {
    if !state.round_active() {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "No round in progress",
        ));
    }
    if state.draw_ptr != 0 {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Table already dealt this round",
        ));
    }
    debug_assert!(state.deck.len() >= TABLE_SLOTS);
    fill_table(state);
    Ok(vec![table_updated(state), status_changed(state, None)])
}

/// Player clicked `slot`. Starts a removal transition when the slot holds a
/// picture card; everything else is a silent no-op.
pub fn begin_removal(state: &mut GameState, slot: usize) -> Result<Vec<GameEvent>, DomainError> {
    require_slot(slot)?;
    if !state.round_active() {
        return Ok(Vec::new());
    }
    let Some(card) = state.table.card(slot) else {
        return Ok(Vec::new());
    };
    if !card.is_picture() || state.pending[slot] {
        return Ok(Vec::new());
    }
    state.pending[slot] = true;
    Ok(vec![GameEvent::RemovalStarted { slot }])
}

/// The presentation finished its removal transition on `slot`: clear the
/// slot and count the picture. The card stays on the table (and keeps
/// blocking the round advance) until this call.
pub fn complete_removal(state: &mut GameState, slot: usize) -> Result<Vec<GameEvent>, DomainError> {
    require_slot(slot)?;
    if !state.pending[slot] {
        return Err(DomainError::validation(
            ValidationKind::RemovalNotPending,
            format!("No removal in progress on slot {slot}"),
        ));
    }
    state.pending[slot] = false;
    state.table.clear(slot);
    state.removed_total += 1;
    let note = if state.table.has_picture() {
        None
    } else {
        Some(StatusNote::TableCleared)
    };
    Ok(vec![
        GameEvent::RemovalFinished { slot },
        table_updated(state),
        status_changed(state, note),
    ])
}

/// True iff the round is live and no table slot holds a picture card.
pub fn can_advance(state: &GameState) -> bool {
    state.round_active() && !state.table.has_picture()
}

/// Pool the table leftovers with the undrawn reserve, reshuffle, and move to
/// the next round, ending the game after the last one.
///
/// Advancing a terminal game is a silent no-op; advancing past remaining
/// pictures emits `RoundRejected` and mutates nothing.
pub fn advance_round(state: &mut GameState, shuffler: &mut dyn DeckShuffler) -> Vec<GameEvent> {
    if !state.round_active() {
        return Vec::new();
    }
    if state.table.has_picture() {
        return vec![GameEvent::RoundRejected {
            reason: RejectReason::FaceCardsRemain,
        }];
    }

    state.round_no += 1;

    if all_rounds_complete(state.round_no) {
        // Table and deck stay frozen for display; only reset leaves this state.
        state.phase = Phase::GameOver;
        let won = state.removed_total >= PICTURE_CARD_COUNT;
        return vec![
            GameEvent::GameOver {
                won,
                removed_total: state.removed_total,
            },
            status_changed(state, Some(StatusNote::GameOver)),
        ];
    }

    let mut pool = state.table.cards();
    pool.extend_from_slice(state.reserve());
    shuffler.shuffle(&mut pool, state.round_no);
    state.deck = pool;
    state.draw_ptr = 0;

    // Threshold is a full table, independent of round number.
    if state.deck.len() < TABLE_SLOTS {
        state.table = Table::empty();
        state.pending = [false; TABLE_SLOTS];
        state.phase = Phase::DeckExhausted;
        return vec![
            GameEvent::DeckExhausted,
            table_updated(state),
            status_changed(state, Some(StatusNote::DeckExhausted)),
        ];
    }

    fill_table(state);
    vec![
        table_updated(state),
        status_changed(state, Some(StatusNote::NewRound)),
    ]
}

/// Return to a freshly shuffled round 1 from any state.
pub fn reset(
    state: &mut GameState,
    shuffler: &mut dyn DeckShuffler,
) -> Result<Vec<GameEvent>, DomainError> {
    let mut deck = fresh_deck();
    shuffler.shuffle(&mut deck, 1);
    *state = GameState::new(deck);
    deal(state)
}
