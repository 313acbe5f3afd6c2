//! Card entity and flip animation.
//!
//! A [`Card`] owns one card's logical and visual state: which face is
//! showing, whether it has been matched, where it sits on the board, and
//! the progress of an in-flight flip. Flips are two-phase: the card first
//! rotates to an edge-on 90°, the visible face swaps at that midpoint, and
//! the rotation then completes to its resting orientation. The visible face
//! never changes at any other moment, so the new face is not revealed while
//! the card is still showing its surface.
//!
//! Cards do not run on their own clock. The owning game advances every
//! in-flight flip from its frame tick via [`Card::advance`].

/// Orientation of a card showing its back, in degrees about the vertical axis.
const BACK_ANGLE: f32 = 0.0;
/// Edge-on orientation at the flip midpoint.
const EDGE_ANGLE: f32 = 90.0;
/// Orientation of a card showing its face.
const FACE_ANGLE: f32 = 180.0;

/// Stable identity of a card: its index into the deck.
///
/// Identities are assigned once when the deck is built and survive resets;
/// only face values are re-dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(pub usize);

/// Index into the palette of face symbols; the pairing key for matches.
///
/// The engine never interprets face values beyond equality. The embedder
/// maps them to artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceValue(pub u16);

/// A point on the board plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linearly interpolates from this position toward `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// Rendering order for a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderLayer {
    /// Normal board ordering.
    #[default]
    Foreground,
    /// On-top ordering used only while a flip is in flight, so the moving
    /// card draws above its neighbors.
    Elevated,
}

/// Logical state of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    /// Resting with the back showing. The only state that accepts clicks.
    FaceDown,
    /// A flip animation is in flight.
    Flipping,
    /// Resting with the face showing.
    FaceUp,
    /// Confirmed as part of a matched pair; ignores input until reset.
    Matched,
}

/// Which rotation half of a flip is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlipStage {
    /// Rotating from the start orientation to edge-on.
    ToEdge,
    /// Rotating from edge-on to the resting orientation.
    ToRest,
}

/// Positional travel attached to a flip, used when mismatched cards swap
/// back to each other's slots.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Travel {
    from: Position,
    to: Position,
}

/// An in-flight flip animation, advanced by the external tick.
///
/// The progress cursor is `elapsed` against the per-phase half duration.
/// Each half covers half of any positional travel; the visible face swaps
/// exactly once, when phase A completes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Flip {
    show_face: bool,
    start_angle: f32,
    travel: Option<Travel>,
    stage: FlipStage,
    elapsed: f32,
}

/// One card on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    id: CardId,
    face_value: FaceValue,
    position: Position,
    angle: f32,
    layer: RenderLayer,
    face_up: bool,
    matched: bool,
    flip: Option<Flip>,
    flip_half_duration: f32,
}

impl Card {
    /// Creates a resting face-down card at the given board position.
    ///
    /// The face value starts as a placeholder; the deal assigns the real one.
    #[must_use]
    pub const fn new(id: CardId, position: Position, flip_half_duration: f32) -> Self {
        Self {
            id,
            face_value: FaceValue(0),
            position,
            angle: BACK_ANGLE,
            layer: RenderLayer::Foreground,
            face_up: false,
            matched: false,
            flip: None,
            flip_half_duration,
        }
    }

    /// Returns the card's identity.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Returns the card's face value.
    #[must_use]
    pub const fn face_value(&self) -> FaceValue {
        self.face_value
    }

    /// Returns the card's current board position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the current rotation about the vertical axis, in degrees
    /// (0 = back showing, 90 = edge-on, 180 = face showing).
    #[must_use]
    pub const fn orientation(&self) -> f32 {
        self.angle
    }

    /// Returns the current rendering order.
    #[must_use]
    pub const fn layer(&self) -> RenderLayer {
        self.layer
    }

    /// Returns whether the face side is the one currently displayed.
    #[must_use]
    pub const fn face_visible(&self) -> bool {
        self.face_up
    }

    /// Returns the card's logical state.
    #[must_use]
    pub const fn state(&self) -> CardState {
        if self.matched {
            CardState::Matched
        } else if self.flip.is_some() {
            CardState::Flipping
        } else if self.face_up {
            CardState::FaceUp
        } else {
            CardState::FaceDown
        }
    }

    /// Sets the displayed face immediately, without animation.
    ///
    /// This is the instantaneous visual flip-point that [`Card::advance`]
    /// performs at the edge-on midpoint of an animated flip; embedders may
    /// also call it directly when laying out a fresh board.
    pub const fn set_face_visible(&mut self, visible: bool) {
        self.face_up = visible;
    }

    /// Assigns the symbol shown when the card is face-up.
    ///
    /// Meaningful only on a resting, unmatched card. The deal sequences
    /// assignment through [`Card::reset`], which guarantees that.
    pub const fn set_face_value(&mut self, value: FaceValue) {
        self.face_value = value;
    }

    /// Marks the card as part of a confirmed match.
    ///
    /// From this point the card ignores clicks until [`Card::reset`].
    pub const fn mark_matched(&mut self) {
        self.matched = true;
    }

    /// Requests a flip animation, optionally combined with travel toward
    /// `target_position`.
    ///
    /// A request while a flip is already in flight is dropped, not queued.
    /// A request that would not change the displayed face and carries no
    /// target is a no-op, so a card is never spun redundantly.
    pub fn request_flip(&mut self, show_face: bool, target_position: Option<Position>) {
        if self.flip.is_some() {
            return;
        }

        // Always flip if the card is also moving
        if target_position.is_none() && self.face_up == show_face {
            return;
        }

        self.layer = RenderLayer::Elevated;
        self.flip = Some(Flip {
            show_face,
            start_angle: self.angle,
            travel: target_position.map(|to| Travel {
                from: self.position,
                to,
            }),
            stage: FlipStage::ToEdge,
            elapsed: 0.0,
        });
    }

    /// Returns the card to its canonical rest state.
    ///
    /// Cancels any in-flight flip atomically: orientation snaps to 0°, the
    /// back is shown, the matched flag clears, and the normal rendering
    /// order is restored. Positions are per-slot, not per-card: a completed
    /// swap is kept, and a swap cancelled mid-travel snaps to its
    /// destination slot so no card rests between slots.
    pub const fn reset(&mut self) {
        if let Some(flip) = self.flip {
            if let Some(travel) = flip.travel {
                self.position = travel.to;
            }
        }
        self.flip = None;
        self.matched = false;
        self.face_up = false;
        self.angle = BACK_ANGLE;
        self.layer = RenderLayer::Foreground;
    }

    /// Advances an in-flight flip by `dt` time units.
    ///
    /// Phase A always completes in full, reaching the edge-on midpoint and
    /// swapping the displayed face, before phase B begins, even when `dt`
    /// overshoots the phase boundary; the remainder carries into phase B
    /// within the same call. On completion the orientation and position
    /// snap to their exact final values and the normal rendering order is
    /// restored. A card with no flip in flight is untouched.
    pub fn advance(&mut self, dt: f32) {
        let Some(mut flip) = self.flip.take() else {
            return;
        };
        let mut dt = dt;

        if flip.stage == FlipStage::ToEdge {
            flip.elapsed += dt;
            if flip.elapsed < self.flip_half_duration {
                let t = flip.elapsed / self.flip_half_duration;
                self.angle = lerp(flip.start_angle, EDGE_ANGLE, t);
                if let Some(travel) = flip.travel {
                    // Phase A covers only the first half of the travel
                    self.position = travel.from.lerp(travel.to, t * 0.5);
                }
                self.flip = Some(flip);
                return;
            }

            // Midpoint: the card is edge-on, so the face swap is invisible
            dt = flip.elapsed - self.flip_half_duration;
            flip.stage = FlipStage::ToRest;
            flip.elapsed = 0.0;
            self.angle = EDGE_ANGLE;
            self.face_up = flip.show_face;
        }

        flip.elapsed += dt;
        let end_angle = if flip.show_face { FACE_ANGLE } else { BACK_ANGLE };
        if flip.elapsed < self.flip_half_duration {
            let t = flip.elapsed / self.flip_half_duration;
            self.angle = lerp(EDGE_ANGLE, end_angle, t);
            if let Some(travel) = flip.travel {
                self.position = travel.from.lerp(travel.to, 0.5 + t * 0.5);
            }
            self.flip = Some(flip);
            return;
        }

        // Snap to exact finals, removing floating-point drift
        self.angle = end_angle;
        if let Some(travel) = flip.travel {
            self.position = travel.to;
        }
        self.layer = RenderLayer::Foreground;
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
