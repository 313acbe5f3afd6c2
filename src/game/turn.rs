use crate::card::{CardId, CardState};
use crate::events::{ClickOutcome, GameEvent, IgnoreReason};

use super::{Game, TurnPhase};

impl Game {
    /// Forwards a click on a card to the turn controller.
    ///
    /// The controller owns all gating. A click is accepted only when no
    /// pair is mid-resolution, the card exists, it is resting face-down,
    /// and it is not already the first selection. Everything else is a
    /// defined no-op reported through the returned [`ClickOutcome`];
    /// ignored clicks change no state.
    ///
    /// An accepted click starts the card's flip and arms the reveal wait;
    /// the consequences (comparison, scoring, flip-back) play out in
    /// subsequent [`Game::tick`] calls.
    pub fn click(&mut self, id: CardId) -> ClickOutcome {
        if self.phase.busy() {
            return ClickOutcome::Ignored(IgnoreReason::Busy);
        }

        let Some(card) = self.cards.get(id.0) else {
            return ClickOutcome::Ignored(IgnoreReason::NoSuchCard);
        };

        match self.phase {
            TurnPhase::Idle => {
                if card.state() != CardState::FaceDown {
                    return ClickOutcome::Ignored(IgnoreReason::NotFaceDown);
                }

                self.cards[id.0].request_flip(true, None);
                self.phase = TurnPhase::RevealingFirst {
                    first: id,
                    remaining: self.options.reveal_delay,
                };
                self.events.push(GameEvent::CardRevealed { card: id });
                ClickOutcome::FirstSelected
            }
            TurnPhase::OneRevealed { first } => {
                // No undo path: re-clicking the first card does nothing
                if id == first {
                    return ClickOutcome::Ignored(IgnoreReason::AlreadySelected);
                }
                if card.state() != CardState::FaceDown {
                    return ClickOutcome::Ignored(IgnoreReason::NotFaceDown);
                }

                self.cards[id.0].request_flip(true, None);
                self.phase = TurnPhase::RevealingSecond {
                    first,
                    second: id,
                    remaining: self.options.reveal_delay,
                };
                self.events.push(GameEvent::CardRevealed { card: id });
                ClickOutcome::SecondSelected
            }
            // busy() ruled the timer phases out above
            _ => ClickOutcome::Ignored(IgnoreReason::Busy),
        }
    }
}
