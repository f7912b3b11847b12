// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard Poker cards types.
//!
//! This crate defines the cards types, a card can be created from a face and a
//! suit or from a seed in the `0..52` range:
//!
//! ```
//! # use fivecard_cards::{Card, Face, Suit};
//! let ah = Card::new(Face::Ace, Suit::Hearts);
//! assert_eq!(ah, Card::from_seed(12).unwrap());
//! assert_eq!(ah.short_label(), "AH");
//! assert_eq!(ah.label(), "Ace_of_Hearts");
//! ```
//!
//! and a [Deck] type that deals cards from a shuffled deck:
//!
//! ```
//! # use fivecard_cards::{Deck, DeckError};
//! let mut deck = Deck::new();
//! for _ in 0..Deck::SIZE {
//!     deck.deal().unwrap();
//! }
//! assert_eq!(deck.deal(), Err(DeckError::Empty));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, Face, Suit};

mod deck;
pub use deck::Deck;

mod error;
pub use error::{CardError, DeckError};
