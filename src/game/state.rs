//! Turn state machine types.

use crate::card::CardId;

/// Phase of the turn controller.
///
/// A turn walks `Idle` → `RevealingFirst` → `OneRevealed` →
/// `RevealingSecond`, then either resolves as a match straight back to
/// `Idle` or continues through `MismatchShown` and `FlippingBack`. Timer
/// phases carry their remaining wait and are advanced by
/// [`Game::tick`](crate::Game::tick).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurnPhase {
    /// No cards selected; waiting for the first click.
    Idle,
    /// The first card is flipping up; clicks are ignored until the reveal
    /// wait elapses.
    RevealingFirst {
        /// First selection.
        first: CardId,
        /// Reveal wait left, in time units.
        remaining: f32,
    },
    /// The first card is revealed; waiting for the second click.
    OneRevealed {
        /// First selection.
        first: CardId,
    },
    /// The second card is flipping up; the pair comparison is pending.
    RevealingSecond {
        /// First selection.
        first: CardId,
        /// Second selection.
        second: CardId,
        /// Reveal wait left, in time units.
        remaining: f32,
    },
    /// Both faces of a mismatched pair are showing; waiting out the display
    /// delay before flipping them back.
    MismatchShown {
        /// First selection.
        first: CardId,
        /// Second selection.
        second: CardId,
        /// Display wait left, in time units.
        remaining: f32,
    },
    /// Mismatched cards are flipping back down while swapping slots.
    FlippingBack {
        /// First selection.
        first: CardId,
        /// Second selection.
        second: CardId,
        /// Flip-back wait left, in time units.
        remaining: f32,
    },
}

impl TurnPhase {
    /// Returns whether a pair is mid-resolution and clicks are rejected.
    ///
    /// Only `Idle` and `OneRevealed` accept selections.
    #[must_use]
    pub const fn busy(&self) -> bool {
        !matches!(self, Self::Idle | Self::OneRevealed { .. })
    }

    /// Returns a snapshot of the current selection.
    #[must_use]
    pub const fn selection(&self) -> Selection {
        match *self {
            Self::Idle => Selection {
                first: None,
                second: None,
                busy: false,
            },
            Self::RevealingFirst { first, .. } => Selection {
                first: Some(first),
                second: None,
                busy: true,
            },
            Self::OneRevealed { first } => Selection {
                first: Some(first),
                second: None,
                busy: false,
            },
            Self::RevealingSecond { first, second, .. }
            | Self::MismatchShown { first, second, .. }
            | Self::FlippingBack { first, second, .. } => Selection {
                first: Some(first),
                second: Some(second),
                busy: true,
            },
        }
    }
}

/// Snapshot of the turn controller's selection slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// First selected card, if any.
    pub first: Option<CardId>,
    /// Second selected card, if any.
    pub second: Option<CardId>,
    /// Whether new selections are currently rejected.
    pub busy: bool,
}
