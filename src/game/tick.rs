use crate::card::CardId;
use crate::events::GameEvent;

use super::{Game, TurnPhase};

impl Game {
    /// Advances every in-flight animation and the turn timer by `dt` time
    /// units.
    ///
    /// This is the engine's only clock. Card flips are advanced first, so
    /// on the tick where a reveal wait expires the card has already
    /// finished its flip, then the turn phase is stepped. Each tick crosses
    /// at most one phase boundary; card animations carry overshoot
    /// internally so their midpoint ordering holds for any `dt`.
    pub fn tick(&mut self, dt: f32) {
        for card in &mut self.cards {
            card.advance(dt);
        }
        self.advance_phase(dt);
    }

    fn advance_phase(&mut self, dt: f32) {
        match self.phase {
            TurnPhase::Idle | TurnPhase::OneRevealed { .. } => {}
            TurnPhase::RevealingFirst { first, remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.phase = TurnPhase::RevealingFirst { first, remaining };
                } else {
                    self.phase = TurnPhase::OneRevealed { first };
                }
            }
            TurnPhase::RevealingSecond {
                first,
                second,
                remaining,
            } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.phase = TurnPhase::RevealingSecond {
                        first,
                        second,
                        remaining,
                    };
                } else {
                    self.evaluate_pair(first, second);
                }
            }
            TurnPhase::MismatchShown {
                first,
                second,
                remaining,
            } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.phase = TurnPhase::MismatchShown {
                        first,
                        second,
                        remaining,
                    };
                } else {
                    self.start_flip_back(first, second);
                }
            }
            TurnPhase::FlippingBack {
                first,
                second,
                remaining,
            } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.phase = TurnPhase::FlippingBack {
                        first,
                        second,
                        remaining,
                    };
                } else {
                    self.events
                        .push(GameEvent::CardsFlippedBack { first, second });
                    self.phase = TurnPhase::Idle;
                }
            }
        }
    }

    /// Compares the revealed pair once the second reveal wait has elapsed.
    fn evaluate_pair(&mut self, first: CardId, second: CardId) {
        if self.cards[first.0].face_value() == self.cards[second.0].face_value() {
            self.score += 1;
            self.cards[first.0].mark_matched();
            self.cards[second.0].mark_matched();
            self.events.push(GameEvent::PairMatched { first, second });
            self.events
                .push(GameEvent::ScoreChanged { score: self.score });
            self.phase = TurnPhase::Idle;
        } else {
            self.events
                .push(GameEvent::PairMismatched { first, second });
            self.phase = TurnPhase::MismatchShown {
                first,
                second,
                remaining: self.options.mismatch_delay,
            };
        }
    }

    /// Flips a mismatched pair back down, each card travelling to the
    /// other's slot.
    fn start_flip_back(&mut self, first: CardId, second: CardId) {
        let first_position = self.cards[first.0].position();
        let second_position = self.cards[second.0].position();

        self.cards[first.0].request_flip(false, Some(second_position));
        self.cards[second.0].request_flip(false, Some(first_position));

        self.phase = TurnPhase::FlippingBack {
            first,
            second,
            remaining: self.options.flip_back_delay,
        };
    }
}
