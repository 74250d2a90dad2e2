//! Core card types: Card, Rank, Suit, and the integer identity mapping.

use serde::{Deserialize, Serialize};

use crate::domain::rules::DECK_SIZE;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// Identity order: Hearts occupy identities 0..13, Spades 39..52.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Decode an integer identity: rank = identity mod 13, suit = identity div 13.
    pub fn from_index(index: u8) -> Result<Card, DomainError> {
        if usize::from(index) >= DECK_SIZE {
            return Err(DomainError::validation(
                ValidationKind::InvalidCardIndex,
                format!("Card identity must be in [0,{DECK_SIZE}), got {index}"),
            ));
        }
        let suit = Suit::ALL[usize::from(index / 13)];
        let rank = Rank::ALL[usize::from(index % 13)];
        Ok(Card { suit, rank })
    }

    /// Integer identity in [0,52); inverse of `from_index`.
    pub fn index(self) -> u8 {
        self.suit as u8 * 13 + self.rank as u8
    }

    /// Jack, Queen, King are the removable picture cards.
    pub fn is_picture(self) -> bool {
        matches!(self.rank, Rank::Jack | Rank::Queen | Rank::King)
    }
}
