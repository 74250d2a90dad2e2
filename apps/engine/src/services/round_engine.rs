//! Round engine facade.
//!
//! Owns the authoritative `GameState` and the shuffler, wraps the pure
//! domain mutations with structured logging, and hands the resulting events
//! to whatever presentation hosts it. One instance per game window;
//! operations run synchronously, one player action at a time.

use tracing::{debug, info};

use crate::domain::dealing::{fresh_deck, DeckShuffler, SeededShuffler};
use crate::domain::events::GameEvent;
use crate::domain::round_flow;
use crate::domain::snapshot::{self, GameSnapshot};
use crate::domain::state::{GameState, Phase};
use crate::errors::domain::DomainError;

pub struct RoundEngine {
    state: GameState,
    shuffler: Box<dyn DeckShuffler>,
}

impl RoundEngine {
    /// Engine with all randomness derived from `game_seed`.
    ///
    /// The deck is shuffled but not yet dealt; call `deal_initial` to open
    /// round 1.
    pub fn new(game_seed: u64) -> Self {
        Self::with_shuffler(Box::new(SeededShuffler::new(game_seed)))
    }

    /// Engine seeded from process entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Engine with a custom deck-ordering source (tests, demos).
    pub fn with_shuffler(mut shuffler: Box<dyn DeckShuffler>) -> Self {
        let mut deck = fresh_deck();
        shuffler.shuffle(&mut deck, 1);
        Self {
            state: GameState::new(deck),
            shuffler,
        }
    }

    /// Adopt an externally constructed state (fixtures).
    pub fn from_state(state: GameState, shuffler: Box<dyn DeckShuffler>) -> Self {
        Self { state, shuffler }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        snapshot::snapshot(&self.state)
    }

    pub fn status_line(&self) -> String {
        snapshot::status_line(&self.state)
    }

    /// First deal of a fresh game.
    pub fn deal_initial(&mut self) -> Result<Vec<GameEvent>, DomainError> {
        info!(round = self.state.round_no, "Dealing initial table");
        round_flow::deal(&mut self.state)
    }

    /// Player clicked `slot`; starts a removal transition when it holds a
    /// picture card. The presentation animates, then calls back
    /// `complete_removal`.
    pub fn attempt_remove(&mut self, slot: usize) -> Result<Vec<GameEvent>, DomainError> {
        let events = round_flow::begin_removal(&mut self.state, slot)?;
        if !events.is_empty() {
            debug!(slot, "Removal transition started");
        }
        Ok(events)
    }

    /// The presentation finished its removal transition on `slot`.
    pub fn complete_removal(&mut self, slot: usize) -> Result<Vec<GameEvent>, DomainError> {
        let events = round_flow::complete_removal(&mut self.state, slot)?;
        info!(
            slot,
            removed_total = self.state.removed_total,
            "Picture removed"
        );
        Ok(events)
    }

    pub fn can_advance(&self) -> bool {
        round_flow::can_advance(&self.state)
    }

    /// Reshuffle the remaining pool and move to the next round.
    pub fn advance_round(&mut self) -> Vec<GameEvent> {
        let round_before = self.state.round_no;
        let events = round_flow::advance_round(&mut self.state, self.shuffler.as_mut());
        if self.state.round_no == round_before {
            // Rejected, or a terminal-state no-op.
            return events;
        }
        match self.state.phase {
            Phase::Playing => {
                info!(round = self.state.round_no, "New round dealt");
            }
            Phase::GameOver => {
                debug!("Transition: Playing -> GameOver");
                info!(
                    removed_total = self.state.removed_total,
                    "Game over after final round"
                );
            }
            Phase::DeckExhausted => {
                debug!("Transition: Playing -> DeckExhausted");
                info!("Deck exhausted; reset required");
            }
        }
        events
    }

    /// Start a brand new game with fresh entropy.
    pub fn reset(&mut self) -> Result<Vec<GameEvent>, DomainError> {
        self.reset_with_seed(rand::random())
    }

    /// Start a brand new game, reproducible from `game_seed`.
    pub fn reset_with_seed(&mut self, game_seed: u64) -> Result<Vec<GameEvent>, DomainError> {
        info!(game_seed, "Resetting game");
        self.shuffler = Box::new(SeededShuffler::new(game_seed));
        round_flow::reset(&mut self.state, self.shuffler.as_mut())
    }
}
