//! A single-table blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full round flow: betting,
//! the opening deal, player decisions, the dealer's turn, settlement, and
//! cleanup of players who leave or go broke. Reading input and printing the
//! table are left to the caller; every entity implements `Display` for that.
//!
//! # Example
//!
//! ```
//! use bjtable::{Action, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.seat_players(1).unwrap();
//! game.start_betting().unwrap();
//! game.bet(1, 25).unwrap();
//! game.deal().unwrap();
//! if game.current_player().is_some() {
//!     game.act(1, Action::Stand).unwrap();
//! }
//! game.dealer_play().unwrap();
//! let result = game.showdown().unwrap();
//! assert_eq!(result.players.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod money;
pub mod options;
pub mod player;
pub mod result;
pub mod table;

// Re-export main types
pub use action::{Action, ActionEvent, ActionOutcome};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use dealer::Dealer;
pub use deck::Deck;
pub use error::{
    ActionError, BetError, CleanupError, DealError, DrawError, SeatError, ShowdownError,
};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use money::{Money, Ratio};
pub use options::{BlackjackRule, GameOptions};
pub use player::Player;
pub use result::{CleanupReport, Outcome, PlayerResult, RoundResult};
pub use table::Table;
