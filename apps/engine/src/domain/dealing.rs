//! Deck construction and deterministic shuffling.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::cards::{Card, Rank, Suit};
use crate::domain::rules::DECK_SIZE;
use crate::domain::seed_derivation::derive_shuffle_seed;

/// Generate the full 52-card deck in identity order.
pub fn fresh_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Uniform shuffle driven by a fixed seed.
pub fn shuffle_with_seed(cards: &mut [Card], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    cards.shuffle(&mut rng);
}

/// Source of deck orderings for the initial deal and every round transition.
///
/// The engine never reaches for a global RNG; orderings flow through this
/// seam so tests can supply deterministic permutations.
pub trait DeckShuffler: Send {
    /// Reorder `cards` in place for the given 1-based round number.
    fn shuffle(&mut self, cards: &mut [Card], round_no: u8);
}

/// Production shuffler: uniform permutations, all derived from one game seed.
#[derive(Debug, Clone)]
pub struct SeededShuffler {
    game_seed: u64,
}

impl SeededShuffler {
    pub fn new(game_seed: u64) -> Self {
        Self { game_seed }
    }
}

impl DeckShuffler for SeededShuffler {
    fn shuffle(&mut self, cards: &mut [Card], round_no: u8) {
        shuffle_with_seed(cards, derive_shuffle_seed(self.game_seed, round_no));
    }
}
