#![cfg(test)]

use crate::domain::dealing::SeededShuffler;
use crate::domain::events::{GameEvent, RejectReason, StatusNote};
use crate::domain::fixtures::{
    deck_pictures_first, deck_pictures_last, PicturesFirstShuffler, PicturesLastShuffler,
};
use crate::domain::round_flow::{advance_round, can_advance, deal, reset};
use crate::domain::rules::{MAX_ROUNDS, PICTURE_CARD_COUNT, TABLE_SLOTS};
use crate::domain::state::{GameState, Phase};
use crate::domain::test_state_helpers::{assert_conserved, dealt, remove_all_pictures};

#[test]
fn advance_rejected_while_pictures_remain() {
    let mut state = dealt(deck_pictures_first());
    let before = state.clone();

    let events = advance_round(&mut state, &mut PicturesLastShuffler);
    assert_eq!(
        events,
        vec![GameEvent::RoundRejected {
            reason: RejectReason::FaceCardsRemain,
        }]
    );
    assert_eq!(state, before, "rejection must not mutate anything");
}

#[test]
fn advance_deals_the_next_round() {
    let mut state = dealt(deck_pictures_last());
    assert!(can_advance(&state));

    let events = advance_round(&mut state, &mut PicturesLastShuffler);
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], GameEvent::TableUpdated { .. }));
    assert!(matches!(
        events[1],
        GameEvent::StatusChanged {
            round_no: 2,
            message: Some(StatusNote::NewRound),
            ..
        }
    ));
    assert_eq!(state.round_no, 2);
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.draw_ptr, TABLE_SLOTS);
    assert_eq!(state.table.occupied(), TABLE_SLOTS);
    assert_conserved(&state);
}

#[test]
fn four_clean_rounds_end_in_a_loss() {
    let mut state = dealt(deck_pictures_last());

    for expected_round in 2..=MAX_ROUNDS {
        let events = advance_round(&mut state, &mut PicturesLastShuffler);
        assert!(matches!(
            events[1],
            GameEvent::StatusChanged { round_no, message: Some(StatusNote::NewRound), .. }
                if round_no == expected_round
        ));
        assert_conserved(&state);
    }

    let events = advance_round(&mut state, &mut PicturesLastShuffler);
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        GameEvent::GameOver {
            won: false,
            removed_total: 0,
        }
    ));
    assert!(matches!(
        events[1],
        GameEvent::StatusChanged {
            round_no: 5,
            message: Some(StatusNote::GameOver),
            ..
        }
    ));
    assert_eq!(state.phase, Phase::GameOver);
    assert!(!state.round_active());
    assert_eq!(state.round_no, MAX_ROUNDS + 1);
    // The final table stays on display.
    assert_eq!(state.table.occupied(), TABLE_SLOTS);
    assert_conserved(&state);
}

#[test]
fn clearing_every_round_ends_in_a_win() {
    let mut state = dealt(deck_pictures_first());
    assert_eq!(remove_all_pictures(&mut state), 12);

    let mut last_events = Vec::new();
    for _ in 0..MAX_ROUNDS {
        remove_all_pictures(&mut state);
        last_events = advance_round(&mut state, &mut PicturesFirstShuffler);
    }

    assert!(matches!(
        last_events[0],
        GameEvent::GameOver {
            won: true,
            removed_total: PICTURE_CARD_COUNT,
        }
    ));
    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.removed_total, PICTURE_CARD_COUNT);
    assert_conserved(&state);
}

#[test]
fn deck_exhaustion_ends_the_game() {
    // Hand-constructed boundary: thin the table and reserve until the pool
    // cannot fill a 16-slot table.
    let mut state = dealt(deck_pictures_last());
    for slot in 0..10 {
        state.table.clear(slot);
    }
    state.deck.truncate(state.draw_ptr + 4);

    let events = advance_round(&mut state, &mut PicturesLastShuffler);
    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], GameEvent::DeckExhausted));
    assert!(matches!(
        events[1],
        GameEvent::TableUpdated { slots } if slots.iter().all(|s| s.is_none())
    ));
    assert!(matches!(
        events[2],
        GameEvent::StatusChanged {
            round_no: 2,
            message: Some(StatusNote::DeckExhausted),
            ..
        }
    ));
    assert_eq!(state.phase, Phase::DeckExhausted);
    assert!(!state.round_active());
    assert_eq!(state.table.occupied(), 0);
    // 6 table leftovers + 4 reserve cards became the dead pool.
    assert_eq!(state.deck.len(), 10);
}

#[test]
fn advance_ignored_in_terminal_states() {
    for phase in [Phase::GameOver, Phase::DeckExhausted] {
        let mut state = dealt(deck_pictures_last());
        state.phase = phase;
        let before = state.clone();

        let events = advance_round(&mut state, &mut PicturesLastShuffler);
        assert!(events.is_empty());
        assert_eq!(state, before);
    }
}

#[test]
fn reset_restores_a_fresh_game_from_any_state() {
    let mut state = dealt(deck_pictures_first());
    remove_all_pictures(&mut state);
    advance_round(&mut state, &mut PicturesFirstShuffler);
    assert_eq!(state.round_no, 2);
    assert_eq!(state.removed_total, PICTURE_CARD_COUNT);

    let mut shuffler = SeededShuffler::new(7);
    let events = reset(&mut state, &mut shuffler).unwrap();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], GameEvent::TableUpdated { .. }));
    assert!(matches!(
        events[1],
        GameEvent::StatusChanged {
            round_no: 1,
            removed_total: 0,
            message: None,
        }
    ));
    assert_eq!(state.round_no, 1);
    assert_eq!(state.removed_total, 0);
    assert!(state.round_active());
    assert_eq!(state.table.occupied(), TABLE_SLOTS);
    assert_eq!(state.draw_ptr, TABLE_SLOTS);
    assert_conserved(&state);
}

#[test]
fn redeal_and_initial_deal_share_the_same_path() {
    // Both fill slots 0..16 from the deck front.
    let mut initial = GameState::new(deck_pictures_last());
    deal(&mut initial).unwrap();
    let first_table = initial.table.clone();
    assert_eq!(
        first_table.cards(),
        deck_pictures_last()[..TABLE_SLOTS].to_vec()
    );

    let mut advanced = dealt(deck_pictures_last());
    advance_round(&mut advanced, &mut PicturesLastShuffler);
    assert_eq!(advanced.table.cards(), advanced.deck[..TABLE_SLOTS].to_vec());
    assert_eq!(advanced.draw_ptr, TABLE_SLOTS);
}
