//! Grid layout and pair assignment.

use alloc::vec::Vec;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, CardId, FaceValue, Position};
use crate::error::SetupError;
use crate::options::GameOptions;

/// Checks that the configured grid can host a paired deck.
///
/// # Errors
///
/// Returns an error if the grid is empty, the card count is odd, or the
/// palette size does not equal the pair count.
pub fn validate(options: &GameOptions) -> Result<(), SetupError> {
    let count = options.card_count();
    if count == 0 {
        return Err(SetupError::EmptyGrid);
    }
    if count % 2 != 0 {
        return Err(SetupError::OddCardCount { count });
    }

    let expected = count / 2;
    if options.palette_size != expected {
        return Err(SetupError::PaletteMismatch {
            expected,
            actual: options.palette_size,
        });
    }

    Ok(())
}

/// Builds the `rows x cols` deck at fixed grid offsets from the origin.
///
/// Cards are created once per game; resets reuse these instances and only
/// re-deal their face values.
#[must_use]
pub fn build_grid(options: &GameOptions) -> Vec<Card> {
    let mut cards = Vec::with_capacity(options.card_count());

    for row in 0..options.rows {
        for col in 0..options.cols {
            let position = Position::new(
                options.origin.x + f32::from(col) * options.x_spacing,
                options.origin.y + f32::from(row) * options.y_spacing,
            );
            cards.push(Card::new(
                CardId(cards.len()),
                position,
                options.flip_half_duration,
            ));
        }
    }

    cards
}

/// Deals a fresh pairing onto the deck in place.
///
/// Builds a sequence holding each face value exactly twice, applies an
/// unbiased Fisher-Yates shuffle, and assigns the shuffled values to the
/// cards in order. Every face value ends up on exactly two cards, and every
/// arrangement of the deck is equally likely.
pub fn assign_pairs(cards: &mut [Card], rng: &mut ChaCha8Rng) {
    let pairs = cards.len() / 2;

    let mut values = Vec::with_capacity(cards.len());
    for value in 0..pairs {
        values.push(FaceValue(value as u16));
        values.push(FaceValue(value as u16));
    }

    for i in (1..values.len()).rev() {
        let j = rng.random_range(0..=i);
        values.swap(i, j);
    }

    for (card, value) in cards.iter_mut().zip(values) {
        card.set_face_value(value);
    }
}
