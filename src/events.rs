//! Click outcomes and events emitted by the turn controller.
//!
//! The engine has no callback registry; consequences of clicks and timer
//! expiries are queued as [`GameEvent`]s that the embedder drains with
//! [`Game::take_events`](crate::Game::take_events). Ignoring every event is
//! behaviorally valid; the queue exists for presentation, not for game
//! state.

use crate::card::CardId;

/// Why a click was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A pair is being resolved; no selections are accepted right now.
    Busy,
    /// The card is not resting face-down (flipping, face-up, or matched).
    NotFaceDown,
    /// The card is already the first selection; there is no undo path.
    AlreadySelected,
    /// No card with this identity exists.
    NoSuchCard,
}

/// Result of forwarding a click to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The card became the first selection and is flipping up.
    FirstSelected,
    /// The card became the second selection; comparison is pending.
    SecondSelected,
    /// The click changed nothing.
    Ignored(IgnoreReason),
}

/// Something the presentation layer may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The score changed; carries the new total.
    ScoreChanged {
        /// Current score.
        score: u32,
    },
    /// A selected card started flipping face-up.
    CardRevealed {
        /// The selected card.
        card: CardId,
    },
    /// Both selections held the same face value and are now matched.
    PairMatched {
        /// First selection.
        first: CardId,
        /// Second selection.
        second: CardId,
    },
    /// The selections held different face values; they will flip back after
    /// the display wait. Frontends typically run their shake and flash
    /// effects off this event.
    PairMismatched {
        /// First selection.
        first: CardId,
        /// Second selection.
        second: CardId,
    },
    /// A mismatched pair finished flipping back down; the turn is over.
    CardsFlippedBack {
        /// First selection.
        first: CardId,
        /// Second selection.
        second: CardId,
    },
}
