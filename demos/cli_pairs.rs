//! CLI memory matching example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pairmatch::{
    Card, CardId, CardState, ClickOutcome, FaceValue, Game, GameEvent, GameOptions, IgnoreReason,
};

const STEP: f32 = 0.05;

fn main() {
    println!("Memory matching CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Game::new(options, seed).expect("default options are valid");

    loop {
        render(&game);

        if game.is_complete() {
            println!("All pairs found! Final score: {}", game.score());
            let Some(answer) = prompt("Play again? (y/n): ") else {
                break;
            };
            if answer.eq_ignore_ascii_case("y") {
                game.reset();
                game.take_events();
                continue;
            }
            break;
        }

        let Some(input) = prompt("Card number (r to redeal, q to quit): ") else {
            break;
        };

        match input.as_str() {
            "q" => break,
            "r" => {
                game.reset();
                game.take_events();
                println!("Board redealt.");
                continue;
            }
            _ => {}
        }

        let Ok(index) = input.parse::<usize>() else {
            println!("Enter a card number, 'r', or 'q'.");
            continue;
        };

        match game.click(CardId(index)) {
            ClickOutcome::Ignored(reason) => println!("Ignored: {}", describe(reason)),
            ClickOutcome::FirstSelected | ClickOutcome::SecondSelected => settle(&mut game),
        }
    }

    println!("Goodbye.");
}

/// Runs the clock until the controller accepts input again, narrating
/// events as they surface.
fn settle(game: &mut Game) {
    loop {
        game.tick(STEP);
        for event in game.take_events() {
            match event {
                GameEvent::CardRevealed { card } => println!("Revealed card {}.", card.0),
                GameEvent::PairMatched { .. } => println!("A match!"),
                GameEvent::ScoreChanged { score } => println!("Score: {score}"),
                GameEvent::PairMismatched { .. } => {
                    println!("No match.");
                    render(game);
                }
                GameEvent::CardsFlippedBack { .. } => println!("Cards flipped back."),
            }
        }
        if !game.is_busy() {
            break;
        }
    }
}

fn render(game: &Game) {
    let cols = game.options().cols as usize;

    println!();
    for (index, card) in game.cards().iter().enumerate() {
        if index > 0 && index % cols == 0 {
            println!();
        }
        print!("  {}", label(card, index));
    }
    println!();
    println!("Score: {}", game.score());
}

fn label(card: &Card, index: usize) -> String {
    match card.state() {
        CardState::FaceDown | CardState::Flipping => format!("{index:2}:##"),
        CardState::FaceUp => format!("{index:2}:{} ", symbol(card.face_value())),
        CardState::Matched => format!("{index:2}:{}*", symbol(card.face_value())),
    }
}

fn symbol(value: FaceValue) -> char {
    (b'A' + (value.0 % 26) as u8) as char
}

fn describe(reason: IgnoreReason) -> &'static str {
    match reason {
        IgnoreReason::Busy => "wait for the current pair to resolve",
        IgnoreReason::NotFaceDown => "that card is not face-down",
        IgnoreReason::AlreadySelected => "that card is already selected",
        IgnoreReason::NoSuchCard => "no card has that number",
    }
}

fn prompt(message: &str) -> Option<String> {
    print!("{message}");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line).ok()?;
    if bytes == 0 {
        return None;
    }

    Some(line.trim().to_string())
}
