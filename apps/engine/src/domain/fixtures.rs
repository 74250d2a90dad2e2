//! Rigged decks and shufflers for fixtures, demos, and test scenarios.

use super::cards::Card;
use super::dealing::{fresh_deck, DeckShuffler};

/// Centralized helper for parsing hardcoded card tokens in fixtures.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded card tokens into Card instances.
    ///
    /// Intended only for tokens known to be valid at compile time.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Card>().expect("hardcoded valid card token")
            })
            .collect()
    }
}

/// Full-deck ordering with every picture card in the first positions.
///
/// Dealing this puts all 12 pictures on the table at once.
pub fn deck_pictures_first() -> Vec<Card> {
    let mut deck = fresh_deck();
    deck.sort_by_key(|card| !card.is_picture());
    deck
}

/// Full-deck ordering with every picture card buried in the reserve.
pub fn deck_pictures_last() -> Vec<Card> {
    let mut deck = fresh_deck();
    deck.sort_by_key(|card| card.is_picture());
    deck
}

/// Shuffler that deals every remaining picture straight onto the table.
pub struct PicturesFirstShuffler;

impl DeckShuffler for PicturesFirstShuffler {
    fn shuffle(&mut self, cards: &mut [Card], _round_no: u8) {
        cards.sort_by_key(|card| !card.is_picture());
    }
}

/// Shuffler that keeps every picture out of reach in the reserve.
pub struct PicturesLastShuffler;

impl DeckShuffler for PicturesLastShuffler {
    fn shuffle(&mut self, cards: &mut [Card], _round_no: u8) {
        cards.sort_by_key(|card| card.is_picture());
    }
}
