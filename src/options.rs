//! Game configuration options.

use crate::card::Position;

#[cfg(feature = "std")]
fn sine(x: f32) -> f32 {
    x.sin()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn sine(x: f32) -> f32 {
    libm::sinf(x)
}

/// Easing curve for cosmetic effect envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
    /// Hermite smoothstep, easing both ends.
    #[default]
    SmoothStep,
    /// Quarter-sine curve, fast start and soft landing.
    SineOut,
}

impl Easing {
    /// Evaluates the curve at `t`, clamped to `0.0..=1.0`.
    ///
    /// # Example
    ///
    /// ```
    /// use pairmatch::Easing;
    ///
    /// assert_eq!(Easing::Linear.evaluate(0.25), 0.25);
    /// assert_eq!(Easing::SmoothStep.evaluate(1.0), 1.0);
    /// assert_eq!(Easing::SineOut.evaluate(0.0), 0.0);
    /// ```
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::SineOut => sine(t * core::f32::consts::FRAC_PI_2),
        }
    }
}

/// Cosmetic camera-shake parameters, carried for the embedder.
///
/// The engine never shakes anything itself; a frontend reacting to
/// [`GameEvent::PairMismatched`](crate::GameEvent::PairMismatched) reads
/// these to drive its own effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeOptions {
    /// How long the shake lasts, in time units.
    pub duration: f32,
    /// Maximum offset magnitude, in board units.
    pub magnitude: f32,
}

impl Default for ShakeOptions {
    fn default() -> Self {
        Self {
            duration: 0.5,
            magnitude: 0.1,
        }
    }
}

impl ShakeOptions {
    /// Sets the shake duration.
    #[must_use]
    pub const fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the maximum shake offset.
    #[must_use]
    pub const fn with_magnitude(mut self, magnitude: f32) -> Self {
        self.magnitude = magnitude;
        self
    }
}

/// Cosmetic screen-flash parameters, carried for the embedder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlashOptions {
    /// How long the flash lasts, in time units.
    pub duration: f32,
    /// Peak opacity of the flash overlay.
    pub max_alpha: f32,
    /// Envelope applied across the flash duration.
    pub easing: Easing,
}

impl Default for FlashOptions {
    fn default() -> Self {
        Self {
            duration: 0.2,
            max_alpha: 0.5,
            easing: Easing::SmoothStep,
        }
    }
}

impl FlashOptions {
    /// Sets the flash duration.
    #[must_use]
    pub const fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the peak flash opacity.
    #[must_use]
    pub const fn with_max_alpha(mut self, max_alpha: f32) -> Self {
        self.max_alpha = max_alpha;
        self
    }

    /// Sets the flash envelope curve.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Configuration options for a matching game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pairmatch::GameOptions;
///
/// let options = GameOptions::default()
///     .with_rows(3)
///     .with_cols(4)
///     .with_palette_size(6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOptions {
    /// Number of grid rows.
    pub rows: u8,
    /// Number of grid columns.
    pub cols: u8,
    /// Number of distinct face symbols; must equal `rows * cols / 2`.
    pub palette_size: usize,
    /// Board position of the first card.
    pub origin: Position,
    /// Horizontal distance between neighboring cards.
    pub x_spacing: f32,
    /// Vertical distance between neighboring rows.
    pub y_spacing: f32,
    /// Duration of each rotation half of a flip, in time units.
    pub flip_half_duration: f32,
    /// Wait after a selection before the reveal is considered complete.
    pub reveal_delay: f32,
    /// Extra wait showing both faces of a mismatched pair before they flip
    /// back.
    pub mismatch_delay: f32,
    /// Wait for the flip-back animation before new input is accepted.
    pub flip_back_delay: f32,
    /// Cosmetic camera-shake parameters.
    pub shake: ShakeOptions,
    /// Cosmetic screen-flash parameters.
    pub flash: FlashOptions,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            rows: 2,
            cols: 4,
            palette_size: 4,
            origin: Position::new(0.0, 0.0),
            x_spacing: 2.0,
            y_spacing: -2.5,
            flip_half_duration: 0.25,
            reveal_delay: 0.5,
            mismatch_delay: 1.0,
            flip_back_delay: 0.5,
            shake: ShakeOptions {
                duration: 0.5,
                magnitude: 0.1,
            },
            flash: FlashOptions {
                duration: 0.2,
                max_alpha: 0.5,
                easing: Easing::SmoothStep,
            },
        }
    }
}

impl GameOptions {
    /// Sets the number of grid rows.
    ///
    /// # Example
    ///
    /// ```
    /// use pairmatch::GameOptions;
    ///
    /// let options = GameOptions::default().with_rows(4);
    /// assert_eq!(options.rows, 4);
    /// ```
    #[must_use]
    pub const fn with_rows(mut self, rows: u8) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the number of grid columns.
    ///
    /// # Example
    ///
    /// ```
    /// use pairmatch::GameOptions;
    ///
    /// let options = GameOptions::default().with_cols(5);
    /// assert_eq!(options.cols, 5);
    /// ```
    #[must_use]
    pub const fn with_cols(mut self, cols: u8) -> Self {
        self.cols = cols;
        self
    }

    /// Sets the number of distinct face symbols.
    ///
    /// # Example
    ///
    /// ```
    /// use pairmatch::GameOptions;
    ///
    /// let options = GameOptions::default().with_palette_size(10);
    /// assert_eq!(options.palette_size, 10);
    /// ```
    #[must_use]
    pub const fn with_palette_size(mut self, palette_size: usize) -> Self {
        self.palette_size = palette_size;
        self
    }

    /// Sets the board position of the first card.
    ///
    /// # Example
    ///
    /// ```
    /// use pairmatch::{GameOptions, Position};
    ///
    /// let options = GameOptions::default().with_origin(Position::new(-3.0, 2.5));
    /// assert_eq!(options.origin, Position::new(-3.0, 2.5));
    /// ```
    #[must_use]
    pub const fn with_origin(mut self, origin: Position) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the horizontal card spacing.
    ///
    /// # Example
    ///
    /// ```
    /// use pairmatch::GameOptions;
    ///
    /// let options = GameOptions::default().with_x_spacing(1.5);
    /// assert_eq!(options.x_spacing, 1.5);
    /// ```
    #[must_use]
    pub const fn with_x_spacing(mut self, x_spacing: f32) -> Self {
        self.x_spacing = x_spacing;
        self
    }

    /// Sets the vertical row spacing.
    ///
    /// # Example
    ///
    /// ```
    /// use pairmatch::GameOptions;
    ///
    /// let options = GameOptions::default().with_y_spacing(-2.0);
    /// assert_eq!(options.y_spacing, -2.0);
    /// ```
    #[must_use]
    pub const fn with_y_spacing(mut self, y_spacing: f32) -> Self {
        self.y_spacing = y_spacing;
        self
    }

    /// Sets the duration of each rotation half of a flip.
    ///
    /// # Example
    ///
    /// ```
    /// use pairmatch::GameOptions;
    ///
    /// let options = GameOptions::default().with_flip_half_duration(0.1);
    /// assert_eq!(options.flip_half_duration, 0.1);
    /// ```
    #[must_use]
    pub const fn with_flip_half_duration(mut self, duration: f32) -> Self {
        self.flip_half_duration = duration;
        self
    }

    /// Sets the reveal wait after a selection.
    ///
    /// # Example
    ///
    /// ```
    /// use pairmatch::GameOptions;
    ///
    /// let options = GameOptions::default().with_reveal_delay(0.2);
    /// assert_eq!(options.reveal_delay, 0.2);
    /// ```
    #[must_use]
    pub const fn with_reveal_delay(mut self, delay: f32) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Sets the wait showing both faces of a mismatched pair.
    ///
    /// # Example
    ///
    /// ```
    /// use pairmatch::GameOptions;
    ///
    /// let options = GameOptions::default().with_mismatch_delay(2.0);
    /// assert_eq!(options.mismatch_delay, 2.0);
    /// ```
    #[must_use]
    pub const fn with_mismatch_delay(mut self, delay: f32) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Sets the wait for the flip-back animation.
    ///
    /// # Example
    ///
    /// ```
    /// use pairmatch::GameOptions;
    ///
    /// let options = GameOptions::default().with_flip_back_delay(0.3);
    /// assert_eq!(options.flip_back_delay, 0.3);
    /// ```
    #[must_use]
    pub const fn with_flip_back_delay(mut self, delay: f32) -> Self {
        self.flip_back_delay = delay;
        self
    }

    /// Sets the cosmetic camera-shake parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use pairmatch::{GameOptions, ShakeOptions};
    ///
    /// let options =
    ///     GameOptions::default().with_shake(ShakeOptions::default().with_magnitude(0.3));
    /// assert_eq!(options.shake.magnitude, 0.3);
    /// ```
    #[must_use]
    pub const fn with_shake(mut self, shake: ShakeOptions) -> Self {
        self.shake = shake;
        self
    }

    /// Sets the cosmetic screen-flash parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use pairmatch::{Easing, FlashOptions, GameOptions};
    ///
    /// let options =
    ///     GameOptions::default().with_flash(FlashOptions::default().with_easing(Easing::SineOut));
    /// assert_eq!(options.flash.easing, Easing::SineOut);
    /// ```
    #[must_use]
    pub const fn with_flash(mut self, flash: FlashOptions) -> Self {
        self.flash = flash;
        self
    }

    /// Returns the total number of cards on the grid.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Returns the number of pairs the grid holds.
    #[must_use]
    pub const fn pair_count(&self) -> usize {
        self.card_count() / 2
    }
}
