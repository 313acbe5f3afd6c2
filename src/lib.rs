//! A concentration (memory matching) card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full turn flow:
//! click arbitration, two-phase flip animations, pair evaluation, scoring,
//! and board reset. The engine is deterministic and tick-driven: the
//! embedder forwards clicks with [`Game::click`] and advances time with
//! [`Game::tick`]; consequences surface on an event queue drained with
//! [`Game::take_events`].
//!
//! # Example
//!
//! ```
//! use pairmatch::{CardId, Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let mut game = Game::new(options, 42).expect("default options are valid");
//!
//! game.click(CardId(0));
//! game.tick(0.5);
//! for event in game.take_events() {
//!     println!("{event:?}");
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod card;
pub mod error;
pub mod events;
pub mod game;
pub mod options;

// Re-export main types
pub use card::{Card, CardId, CardState, FaceValue, Position, RenderLayer};
pub use error::SetupError;
pub use events::{ClickOutcome, GameEvent, IgnoreReason};
pub use game::{Game, Selection, TurnPhase};
pub use options::{Easing, FlashOptions, GameOptions, ShakeOptions};
