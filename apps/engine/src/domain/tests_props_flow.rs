#![cfg(test)]

//! Property-based tests for the round flow invariants.

use proptest::prelude::*;

use crate::domain::dealing::{fresh_deck, DeckShuffler, SeededShuffler};
use crate::domain::events::GameEvent;
use crate::domain::round_flow::{advance_round, begin_removal, complete_removal, deal};
use crate::domain::rules::{MAX_ROUNDS, PICTURE_CARD_COUNT, TABLE_SLOTS};
use crate::domain::state::{GameState, Phase};
use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::{assert_conserved, dealt, remove_all_pictures};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Dealing any permutation fills the table and conserves the deck.
    #[test]
    fn prop_deal_conserves_deck(deck in test_gens::deck_permutation()) {
        let state = dealt(deck);
        prop_assert_eq!(state.table.occupied(), TABLE_SLOTS);
        prop_assert_eq!(state.reserve().len(), 52 - TABLE_SLOTS);
        assert_conserved(&state);
    }

    /// A click either starts a removal on a picture or changes nothing.
    #[test]
    fn prop_click_starts_removal_only_on_pictures(
        deck in test_gens::deck_permutation(),
        slot in test_gens::slot(),
    ) {
        let mut state = dealt(deck);
        let before = state.clone();

        let events = begin_removal(&mut state, slot).unwrap();
        let clicked = before.table.card(slot).expect("all slots dealt");
        if clicked.is_picture() {
            prop_assert_eq!(events, vec![GameEvent::RemovalStarted { slot }]);
            complete_removal(&mut state, slot).unwrap();
            prop_assert_eq!(state.removed_total, 1);
            prop_assert!(state.table.card(slot).is_none());
            assert_conserved(&state);
        } else {
            prop_assert!(events.is_empty());
            prop_assert_eq!(state, before);
        }
    }

    /// Advancing either redeals a full table or is rejected untouched.
    #[test]
    fn prop_advance_is_all_or_nothing(
        deck in test_gens::deck_permutation(),
        seed in any::<u64>(),
    ) {
        let mut state = dealt(deck);
        let before = state.clone();
        let mut shuffler = SeededShuffler::new(seed);

        let events = advance_round(&mut state, &mut shuffler);
        if before.table.has_picture() {
            let matched = matches!(events[..], [GameEvent::RoundRejected { .. }]);
            prop_assert!(matched);
            prop_assert_eq!(state, before);
        } else {
            // A standard 52-card pool always refills the table.
            prop_assert_eq!(state.round_no, 2);
            prop_assert_eq!(state.table.occupied(), TABLE_SLOTS);
            assert_conserved(&state);
        }
    }

    /// Auto-playing a whole game from any seed terminates in GameOver with a
    /// consistent win verdict; a standard deck can never exhaust.
    #[test]
    fn prop_auto_play_reaches_game_over(seed in any::<u64>()) {
        let mut shuffler = SeededShuffler::new(seed);
        let mut card_deck = fresh_deck();
        shuffler.shuffle(&mut card_deck, 1);
        let mut state = GameState::new(card_deck);
        deal(&mut state).unwrap();

        let mut last_removed = 0;
        let mut final_events = Vec::new();
        for _ in 0..MAX_ROUNDS {
            remove_all_pictures(&mut state);
            prop_assert!(state.removed_total >= last_removed, "removals never regress");
            last_removed = state.removed_total;
            assert_conserved(&state);

            final_events = advance_round(&mut state, &mut shuffler);
            if !state.round_active() {
                break;
            }
        }

        prop_assert_eq!(state.phase, Phase::GameOver);
        prop_assert!(state.removed_total <= PICTURE_CARD_COUNT);
        let won = state.removed_total >= PICTURE_CARD_COUNT;
        let matched = matches!(
            final_events[..],
            [GameEvent::GameOver { won: w, .. }, GameEvent::StatusChanged { .. }] if w == won
        );
        prop_assert!(matched);
        assert_conserved(&state);
    }
}
