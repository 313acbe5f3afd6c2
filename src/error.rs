//! Error types for board setup.
//!
//! Setup validation is the only fallible surface. Clicks on ineligible
//! cards and redundant flip requests are defined no-ops, not errors, and
//! reset is valid from any state.

use thiserror::Error;

/// Errors that can occur when validating a game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The grid has no cards.
    #[error("grid has no cards")]
    EmptyGrid,
    /// The grid holds an odd number of cards and cannot be paired.
    #[error("grid of {count} cards cannot be split into pairs")]
    OddCardCount {
        /// Total cards the grid would hold.
        count: usize,
    },
    /// The palette size does not match the number of pairs.
    #[error("palette of {actual} symbols does not match {expected} pairs")]
    PaletteMismatch {
        /// Pairs the grid holds.
        expected: usize,
        /// Symbols the palette provides.
        actual: usize,
    },
}
