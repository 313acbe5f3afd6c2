//! Game integration tests.

#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use pairmatch::{
    Card, CardId, CardState, ClickOutcome, Easing, FlashOptions, Game, GameEvent, GameOptions,
    IgnoreReason, Position, RenderLayer, SetupError, ShakeOptions, TurnPhase,
};

/// Exactly representable in binary, so driving whole multiples of the
/// default timings lands timer boundaries without float drift.
const STEP: f32 = 0.0625;

fn drive(game: &mut Game, seconds: f32) {
    let steps = (seconds / STEP + 0.5) as usize;
    for _ in 0..steps {
        game.tick(STEP);
    }
}

fn new_game(seed: u64) -> Game {
    Game::new(GameOptions::default(), seed).unwrap()
}

/// Returns two cards sharing a face value.
fn find_pair(game: &Game) -> (CardId, CardId) {
    let cards = game.cards();
    for (i, a) in cards.iter().enumerate() {
        for b in &cards[i + 1..] {
            if a.face_value() == b.face_value() {
                return (a.id(), b.id());
            }
        }
    }
    unreachable!("a dealt board always holds pairs");
}

/// Returns two cards with different face values.
fn find_mismatch(game: &Game) -> (CardId, CardId) {
    let cards = game.cards();
    for (i, a) in cards.iter().enumerate() {
        for b in &cards[i + 1..] {
            if a.face_value() != b.face_value() {
                return (a.id(), b.id());
            }
        }
    }
    unreachable!("a board with more than one pair holds mismatches");
}

fn assert_pairing_valid(game: &Game) {
    let mut counts: HashMap<u16, usize> = HashMap::new();
    for card in game.cards() {
        *counts.entry(card.face_value().0).or_default() += 1;
    }
    assert_eq!(counts.len(), game.card_count() / 2);
    for (&value, &count) in &counts {
        assert_eq!(count, 2, "face value {value} appears {count} times");
    }
}

fn assert_canonical(game: &Game) {
    assert_eq!(game.score(), 0);
    assert_eq!(game.phase(), TurnPhase::Idle);
    assert!(!game.is_busy());

    let selection = game.selection();
    assert_eq!(selection.first, None);
    assert_eq!(selection.second, None);
    assert!(!selection.busy);

    for card in game.cards() {
        assert_eq!(card.state(), CardState::FaceDown);
        assert_eq!(card.orientation(), 0.0);
        assert_eq!(card.layer(), RenderLayer::Foreground);
        assert!(!card.face_visible());
    }

    assert_pairing_valid(game);
}

#[test]
fn dealt_board_holds_every_value_exactly_twice() {
    let game = new_game(42);
    assert_pairing_valid(&game);
    assert_eq!(game.card_count(), 8);
}

#[test]
fn grid_layout_positions_cards_from_origin() {
    let game = new_game(42);

    assert_eq!(game.card(CardId(0)).unwrap().position(), Position::new(0.0, 0.0));
    assert_eq!(game.card(CardId(1)).unwrap().position(), Position::new(2.0, 0.0));
    assert_eq!(game.card(CardId(3)).unwrap().position(), Position::new(6.0, 0.0));
    // Second row steps by the vertical spacing
    assert_eq!(game.card(CardId(4)).unwrap().position(), Position::new(0.0, -2.5));
}

#[test]
fn setup_rejects_invalid_grids() {
    let empty = GameOptions::default().with_rows(0);
    assert_eq!(Game::new(empty, 1).err(), Some(SetupError::EmptyGrid));

    let odd = GameOptions::default().with_rows(3).with_cols(3);
    assert_eq!(
        Game::new(odd, 1).err(),
        Some(SetupError::OddCardCount { count: 9 })
    );

    let mismatched = GameOptions::default().with_palette_size(5);
    assert_eq!(
        Game::new(mismatched, 1).err(),
        Some(SetupError::PaletteMismatch {
            expected: 4,
            actual: 5
        })
    );
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_rows(4)
        .with_cols(5)
        .with_palette_size(10)
        .with_origin(Position::new(-3.0, 2.5))
        .with_x_spacing(1.5)
        .with_y_spacing(-2.0)
        .with_flip_half_duration(0.1)
        .with_reveal_delay(0.2)
        .with_mismatch_delay(2.0)
        .with_flip_back_delay(0.3)
        .with_shake(ShakeOptions::default().with_duration(1.0).with_magnitude(0.3))
        .with_flash(
            FlashOptions::default()
                .with_duration(0.4)
                .with_max_alpha(0.8)
                .with_easing(Easing::SineOut),
        );

    assert_eq!(options.rows, 4);
    assert_eq!(options.cols, 5);
    assert_eq!(options.palette_size, 10);
    assert_eq!(options.origin, Position::new(-3.0, 2.5));
    assert_eq!(options.x_spacing, 1.5);
    assert_eq!(options.y_spacing, -2.0);
    assert_eq!(options.flip_half_duration, 0.1);
    assert_eq!(options.reveal_delay, 0.2);
    assert_eq!(options.mismatch_delay, 2.0);
    assert_eq!(options.flip_back_delay, 0.3);
    assert_eq!(options.shake.duration, 1.0);
    assert_eq!(options.shake.magnitude, 0.3);
    assert_eq!(options.flash.duration, 0.4);
    assert_eq!(options.flash.max_alpha, 0.8);
    assert_eq!(options.flash.easing, Easing::SineOut);
    assert_eq!(options.card_count(), 20);
    assert_eq!(options.pair_count(), 10);
}

#[test]
fn shuffle_is_roughly_uniform_over_layouts() {
    // On a 2x2 board the deal has six distinguishable layouts; over many
    // seeds each should land near 1/6 of the total.
    let options = GameOptions::default()
        .with_rows(2)
        .with_cols(2)
        .with_palette_size(2);

    const RUNS: usize = 3000;
    let mut counts: HashMap<[u16; 4], usize> = HashMap::new();

    for seed in 0..RUNS as u64 {
        let game = Game::new(options, seed).unwrap();
        let layout: Vec<u16> = game.cards().iter().map(|c| c.face_value().0).collect();
        *counts.entry([layout[0], layout[1], layout[2], layout[3]]).or_default() += 1;
    }

    assert_eq!(counts.len(), 6);
    for (&layout, &count) in &counts {
        assert!(
            (400..=600).contains(&count),
            "layout {layout:?} occurred {count} times in {RUNS} runs"
        );
    }
}

#[test]
fn same_seed_deals_same_board() {
    let a = new_game(7);
    let b = new_game(7);

    let layout = |game: &Game| -> Vec<u16> {
        game.cards().iter().map(|c| c.face_value().0).collect()
    };
    assert_eq!(layout(&a), layout(&b));

    // A bigger board has far too many layouts for two seeds to collide
    let options = GameOptions::default()
        .with_rows(4)
        .with_cols(4)
        .with_palette_size(8);
    let c = Game::new(options, 7).unwrap();
    let d = Game::new(options, 8).unwrap();
    assert_ne!(layout(&c), layout(&d));
}

#[test]
fn clicks_are_gated_while_busy() {
    let mut game = new_game(42);
    let (first, second) = find_pair(&game);

    assert_eq!(game.click(first), ClickOutcome::FirstSelected);
    assert!(game.is_busy());

    // The reveal wait has not elapsed yet
    assert_eq!(
        game.click(second),
        ClickOutcome::Ignored(IgnoreReason::Busy)
    );

    drive(&mut game, 0.5);
    assert!(!game.is_busy());
    assert_eq!(game.phase(), TurnPhase::OneRevealed { first });

    // Re-clicking the first selection is a no-op, not an undo
    assert_eq!(
        game.click(first),
        ClickOutcome::Ignored(IgnoreReason::AlreadySelected)
    );

    assert_eq!(game.click(second), ClickOutcome::SecondSelected);

    // A third click before resolution is ignored
    let (other, _) = find_mismatch(&game);
    assert_eq!(game.click(other), ClickOutcome::Ignored(IgnoreReason::Busy));
}

#[test]
fn clicks_on_unknown_and_ineligible_cards_are_ignored() {
    let mut game = new_game(42);

    assert_eq!(
        game.click(CardId(99)),
        ClickOutcome::Ignored(IgnoreReason::NoSuchCard)
    );

    // Resolve a match, then click one of the matched cards
    let (first, second) = find_pair(&game);
    game.click(first);
    drive(&mut game, 0.5);
    game.click(second);
    drive(&mut game, 0.5);
    assert_eq!(game.card(first).unwrap().state(), CardState::Matched);

    assert_eq!(
        game.click(first),
        ClickOutcome::Ignored(IgnoreReason::NotFaceDown)
    );
}

#[test]
fn click_on_card_still_flipping_is_ignored() {
    // Shorten the flip-back wait so the controller goes idle while the
    // mismatched cards are still mid-flip.
    let options = GameOptions::default().with_flip_back_delay(0.125);
    let mut game = Game::new(options, 42).unwrap();
    let (first, second) = find_mismatch(&game);

    game.click(first);
    drive(&mut game, 0.5);
    game.click(second);
    drive(&mut game, 0.5);
    drive(&mut game, 1.0);
    drive(&mut game, 0.125);

    assert_eq!(game.phase(), TurnPhase::Idle);
    assert_eq!(game.card(first).unwrap().state(), CardState::Flipping);
    assert_eq!(
        game.click(first),
        ClickOutcome::Ignored(IgnoreReason::NotFaceDown)
    );
}

#[test]
fn matching_pair_scores_and_locks_both_cards() {
    let mut game = new_game(42);
    let (first, second) = find_pair(&game);

    game.click(first);
    drive(&mut game, 0.5);
    game.click(second);
    drive(&mut game, 0.5);

    assert_eq!(game.score(), 1);
    assert_eq!(game.card(first).unwrap().state(), CardState::Matched);
    assert_eq!(game.card(second).unwrap().state(), CardState::Matched);
    assert_eq!(game.phase(), TurnPhase::Idle);
    assert_eq!(game.selection().first, None);
    assert_eq!(game.selection().second, None);

    assert_eq!(
        game.take_events(),
        vec![
            GameEvent::CardRevealed { card: first },
            GameEvent::CardRevealed { card: second },
            GameEvent::PairMatched { first, second },
            GameEvent::ScoreChanged { score: 1 },
        ]
    );
}

#[test]
fn mismatched_pair_flips_back_and_swaps_slots() {
    let mut game = new_game(42);
    let (first, second) = find_mismatch(&game);
    let first_home = game.card(first).unwrap().position();
    let second_home = game.card(second).unwrap().position();

    game.click(first);
    drive(&mut game, 0.5);
    game.click(second);
    drive(&mut game, 0.5);

    // Both faces stay on display for the mismatch wait
    assert!(matches!(game.phase(), TurnPhase::MismatchShown { .. }));
    assert_eq!(game.card(first).unwrap().state(), CardState::FaceUp);
    assert_eq!(game.card(second).unwrap().state(), CardState::FaceUp);

    drive(&mut game, 1.0);
    assert!(matches!(game.phase(), TurnPhase::FlippingBack { .. }));

    drive(&mut game, 0.5);
    assert_eq!(game.phase(), TurnPhase::Idle);
    assert_eq!(game.score(), 0);
    assert_eq!(game.card(first).unwrap().state(), CardState::FaceDown);
    assert_eq!(game.card(second).unwrap().state(), CardState::FaceDown);

    // Each card snapped exactly onto the other's slot
    assert_eq!(game.card(first).unwrap().position(), second_home);
    assert_eq!(game.card(second).unwrap().position(), first_home);

    assert_eq!(
        game.take_events(),
        vec![
            GameEvent::CardRevealed { card: first },
            GameEvent::CardRevealed { card: second },
            GameEvent::PairMismatched { first, second },
            GameEvent::CardsFlippedBack { first, second },
        ]
    );
}

#[test]
fn matching_every_pair_completes_the_game() {
    let options = GameOptions::default()
        .with_rows(2)
        .with_cols(2)
        .with_palette_size(2);
    let mut game = Game::new(options, 5).unwrap();

    while !game.is_complete() {
        let (first, second) = find_unmatched_pair(&game);
        game.click(first);
        drive(&mut game, 0.5);
        game.click(second);
        drive(&mut game, 0.5);
    }

    assert_eq!(game.score(), 2);
    for card in game.cards() {
        assert_eq!(card.state(), CardState::Matched);
    }
}

fn find_unmatched_pair(game: &Game) -> (CardId, CardId) {
    let cards = game.cards();
    for (i, a) in cards.iter().enumerate() {
        if a.state() != CardState::FaceDown {
            continue;
        }
        for b in &cards[i + 1..] {
            if b.state() == CardState::FaceDown && a.face_value() == b.face_value() {
                return (a.id(), b.id());
            }
        }
    }
    unreachable!("an incomplete board holds an unmatched pair");
}

#[test]
fn flip_swaps_face_only_at_the_edge_on_midpoint() {
    let mut card = Card::new(CardId(0), Position::new(0.0, 0.0), 0.25);
    card.request_flip(true, None);
    assert_eq!(card.state(), CardState::Flipping);
    assert_eq!(card.layer(), RenderLayer::Elevated);

    let mut face_swap_angle = None;
    for _ in 0..8 {
        card.advance(STEP);
        if card.face_visible() && face_swap_angle.is_none() {
            face_swap_angle = Some(card.orientation());
        }
        if card.orientation() < 90.0 {
            assert!(
                !card.face_visible(),
                "face revealed before the card was edge-on"
            );
        }
    }

    // The swap happened exactly at the midpoint, and the flip finished
    assert_eq!(face_swap_angle, Some(90.0));
    assert_eq!(card.orientation(), 180.0);
    assert_eq!(card.state(), CardState::FaceUp);
    assert_eq!(card.layer(), RenderLayer::Foreground);
}

#[test]
fn oversized_tick_still_orders_the_two_phases() {
    let mut card = Card::new(CardId(0), Position::new(0.0, 0.0), 0.25);
    card.request_flip(true, None);

    // A single tick far past both phases must land on the exact finals
    card.advance(10.0);
    assert_eq!(card.orientation(), 180.0);
    assert!(card.face_visible());
    assert_eq!(card.state(), CardState::FaceUp);
    assert_eq!(card.layer(), RenderLayer::Foreground);
}

#[test]
fn flip_with_travel_covers_half_the_distance_per_phase() {
    let mut card = Card::new(CardId(0), Position::new(0.0, 0.0), 0.25);
    let target = Position::new(2.0, -2.5);

    // A flip to the already-shown face still animates when it carries travel
    card.request_flip(false, Some(target));
    assert_eq!(card.state(), CardState::Flipping);

    card.advance(0.25);
    assert_eq!(card.orientation(), 90.0);
    assert_eq!(card.position(), Position::new(1.0, -1.25));

    card.advance(0.25);
    assert_eq!(card.position(), target);
    assert_eq!(card.orientation(), 0.0);
    assert_eq!(card.state(), CardState::FaceDown);
}

#[test]
fn redundant_and_overlapping_flip_requests_are_dropped() {
    let mut card = Card::new(CardId(0), Position::new(0.0, 0.0), 0.25);

    // Already face-down with no travel: nothing to do
    card.request_flip(false, None);
    assert_eq!(card.state(), CardState::FaceDown);
    assert_eq!(card.layer(), RenderLayer::Foreground);

    // A second request mid-flip is dropped, not queued
    card.request_flip(true, None);
    card.advance(0.1);
    card.request_flip(false, Some(Position::new(5.0, 5.0)));
    card.advance(1.0);

    assert_eq!(card.state(), CardState::FaceUp);
    assert_eq!(card.position(), Position::new(0.0, 0.0));
}

#[test]
fn reset_mid_flip_leaves_no_partial_state() {
    let mut game = new_game(42);
    let (first, _) = find_pair(&game);

    game.click(first);
    game.tick(0.1);

    let card = game.card(first).unwrap();
    assert_eq!(card.state(), CardState::Flipping);
    assert!(card.orientation() > 0.0);
    assert_eq!(card.layer(), RenderLayer::Elevated);

    game.reset();
    assert_canonical(&game);
    assert_eq!(game.take_events(), vec![GameEvent::ScoreChanged { score: 0 }]);

    // No cancelled timer fires later: ticking changes nothing
    let snapshot: Vec<Card> = game.cards().to_vec();
    drive(&mut game, 5.0);
    assert_eq!(game.cards(), &snapshot[..]);
    assert_eq!(game.phase(), TurnPhase::Idle);
    assert!(game.take_events().is_empty());
}

#[test]
fn reset_from_every_phase_restores_the_canonical_state() {
    // Idle
    let mut game = new_game(1);
    game.reset();
    assert_canonical(&game);

    // First card revealing
    let mut game = new_game(2);
    let (first, second) = find_pair(&game);
    game.click(first);
    game.reset();
    assert_canonical(&game);

    // One revealed, waiting for the second selection
    let mut game = new_game(2);
    game.click(first);
    drive(&mut game, 0.5);
    game.reset();
    assert_canonical(&game);

    // Second card revealing
    let mut game = new_game(2);
    game.click(first);
    drive(&mut game, 0.5);
    game.click(second);
    game.reset();
    assert_canonical(&game);

    // Mismatch on display
    let mut game = new_game(3);
    let (first, second) = find_mismatch(&game);
    game.click(first);
    drive(&mut game, 0.5);
    game.click(second);
    drive(&mut game, 0.5);
    game.reset();
    assert_canonical(&game);

    // Flipping back
    let mut game = new_game(3);
    let first_home = game.card(first).unwrap().position();
    let second_home = game.card(second).unwrap().position();
    game.click(first);
    drive(&mut game, 0.5);
    game.click(second);
    drive(&mut game, 0.5);
    drive(&mut game, 1.0);
    game.tick(0.1);
    assert!(matches!(game.phase(), TurnPhase::FlippingBack { .. }));
    game.reset();
    assert_canonical(&game);

    // The cancelled swap snapped onto the destination slots, so no card
    // rests between slots
    assert_eq!(game.card(first).unwrap().position(), second_home);
    assert_eq!(game.card(second).unwrap().position(), first_home);
}

#[test]
fn reset_board_is_playable() {
    let mut game = new_game(42);
    let (first, second) = find_pair(&game);
    game.click(first);
    drive(&mut game, 0.5);
    game.click(second);
    drive(&mut game, 0.5);
    assert_eq!(game.score(), 1);

    game.reset();
    game.take_events();

    let (first, second) = find_pair(&game);
    game.click(first);
    drive(&mut game, 0.5);
    game.click(second);
    drive(&mut game, 0.5);

    assert_eq!(game.score(), 1);
    assert!(game
        .take_events()
        .contains(&GameEvent::ScoreChanged { score: 1 }));
}

#[test]
fn score_resets_but_swapped_positions_persist() {
    let mut game = new_game(42);
    let (first, second) = find_mismatch(&game);
    let first_home = game.card(first).unwrap().position();
    let second_home = game.card(second).unwrap().position();

    game.click(first);
    drive(&mut game, 0.5);
    game.click(second);
    drive(&mut game, 2.0);
    assert_eq!(game.card(first).unwrap().position(), second_home);

    // Slots keep whatever card last travelled to them across resets
    game.reset();
    assert_eq!(game.card(first).unwrap().position(), second_home);
    assert_eq!(game.card(second).unwrap().position(), first_home);
}

#[test]
fn easing_curves_are_clamped_and_hit_their_endpoints() {
    assert_eq!(Easing::Linear.evaluate(-1.0), 0.0);
    assert_eq!(Easing::Linear.evaluate(0.25), 0.25);
    assert_eq!(Easing::Linear.evaluate(2.0), 1.0);

    assert_eq!(Easing::SmoothStep.evaluate(0.0), 0.0);
    assert_eq!(Easing::SmoothStep.evaluate(0.5), 0.5);
    assert_eq!(Easing::SmoothStep.evaluate(1.0), 1.0);

    assert_eq!(Easing::SineOut.evaluate(0.0), 0.0);
    assert!((Easing::SineOut.evaluate(1.0) - 1.0).abs() < 1e-6);
    assert!(Easing::SineOut.evaluate(0.5) > 0.5);
}
