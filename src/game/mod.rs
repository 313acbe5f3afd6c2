//! Game engine and turn management.
//!
//! [`Game`] owns the deck, the score, and the turn state machine. It is
//! single-threaded and cooperatively scheduled: the embedder forwards
//! clicks with [`Game::click`] and drives every animation and timer from
//! its frame loop with [`Game::tick`]. Nothing advances between ticks, so
//! the turn phase is the only arbiter of what a click may do.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board;
use crate::card::{Card, CardId};
use crate::error::SetupError;
use crate::events::GameEvent;
use crate::options::GameOptions;

mod state;
mod tick;
mod turn;

pub use state::{Selection, TurnPhase};

/// A memory matching game engine.
///
/// Cards are created once at construction and live for the game's
/// lifetime; resets re-deal face values onto the same instances.
pub struct Game {
    /// The deck, indexed by [`CardId`].
    cards: Vec<Card>,
    /// Game options.
    options: GameOptions,
    /// Confirmed matches this game.
    score: u32,
    /// Turn controller phase.
    phase: TurnPhase,
    /// Pending events for the embedder.
    events: Vec<GameEvent>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The deck is built on the configured grid, dealt a fresh pairing, and
    /// laid out fully face-down.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured grid is empty, holds an odd
    /// number of cards, or disagrees with the palette size.
    ///
    /// # Example
    ///
    /// ```
    /// use pairmatch::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42).expect("default options are valid");
    /// assert_eq!(game.score(), 0);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, SetupError> {
        board::validate(&options)?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = board::build_grid(&options);
        board::assign_pairs(&mut cards, &mut rng);

        Ok(Self {
            cards,
            options,
            score: 0,
            phase: TurnPhase::Idle,
            events: Vec::new(),
            rng,
        })
    }

    /// Returns the game to a freshly-dealt canonical state.
    ///
    /// Valid from any phase: every in-flight flip and timer is cancelled,
    /// the score returns to zero, the selection clears, and the same card
    /// instances are re-dealt and laid out face-down. Undrained events
    /// describe a game that no longer exists, so they are discarded and a
    /// single [`GameEvent::ScoreChanged`] announcing the zeroed score is
    /// queued in their place.
    pub fn reset(&mut self) {
        self.score = 0;
        self.phase = TurnPhase::Idle;

        for card in &mut self.cards {
            card.reset();
        }
        board::assign_pairs(&mut self.cards, &mut self.rng);

        self.events.clear();
        self.events.push(GameEvent::ScoreChanged { score: 0 });
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the options the game was built with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current turn phase.
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Returns a snapshot of the current selection.
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.phase.selection()
    }

    /// Returns whether a pair is mid-resolution and clicks are rejected.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.phase.busy()
    }

    /// Returns the card with the given identity.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.0)
    }

    /// Returns the whole deck in identity order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every pair has been matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.score as usize == self.cards.len() / 2
    }

    /// Drains and returns the pending events, oldest first.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }
}
