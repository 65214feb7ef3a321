//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs rounds against an automated
//! dealer: a shuffled multi-deck [`Shoe`], the initial deal, the blackjack
//! check, the player's turn, the dealer's fixed drawing rule and the final
//! comparison. Input and rendering are left to a [`Table`] implementation.
//!
//! # Example
//!
//! ```
//! use shoejack::{Game, GameOptions};
//!
//! let options = GameOptions::default().with_decks(2);
//! let game = Game::new(options, "Ada", 42).unwrap();
//! assert_eq!(game.cards_remaining(), 104);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod shoe;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, ConfigError, DealError, GameError, ShoeError, ShowdownError};
pub use game::{Game, RoundState};
pub use hand::Hand;
pub use options::GameOptions;
pub use participant::{DEALER_NAME, Participant, Role};
pub use result::{Outcome, PushReason, RoundResult, SessionSummary, WinReason};
pub use shoe::{MAX_DECKS, MIN_DECKS, Shoe};
pub use table::{Action, Moment, ParticipantView, Snapshot, Table};
