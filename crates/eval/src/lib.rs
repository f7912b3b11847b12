// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard Poker hand evaluator.
//!
//! Evaluates 5 cards Poker hands into one of ten categories, from High Card to
//! Royal Flush, and a value that totally orders hands by strength.
//!
//! To use the evaluator deal 5 cards into a [Hand] and compare the hands
//! values:
//!
//! ```
//! # use fivecard_eval::*;
//! let mut deck = Deck::default();
//!
//! // 2H 3H 4H 5H 6H
//! let mut h1 = Hand::new();
//! for _ in 0..Hand::SIZE {
//!     h1.add_card(deck.deal().unwrap()).unwrap();
//! }
//!
//! // 7H 8H 9H TH JH
//! let mut h2 = Hand::new();
//! for _ in 0..Hand::SIZE {
//!     h2.add_card(deck.deal().unwrap()).unwrap();
//! }
//!
//! assert_eq!(h1.rank(), Ok(HandRank::StraightFlush));
//! assert_eq!(h2.rank(), Ok(HandRank::StraightFlush));
//! assert!(h2.value().unwrap() > h1.value().unwrap());
//! assert_eq!(h2.display_string(), "Straight Flush JH TH 9H 8H 7H");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub use error::HandError;

mod hand;
pub use hand::Hand;

mod rank;
pub use rank::HandRank;

// Reexport cards types.
pub use fivecard_cards::{Card, CardError, Deck, DeckError, Face, Suit};
