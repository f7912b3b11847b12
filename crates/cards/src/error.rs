// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck errors.
use thiserror::Error;

/// Errors that can occur when creating a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The seed is outside the `0..52` range.
    #[error("invalid card seed {0}, must be less than 52")]
    InvalidSeed(u8),
    /// The text is not a face character followed by a suit character.
    #[error("invalid card label {0:?}")]
    InvalidLabel(String),
}

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// All the cards have been dealt.
    #[error("no cards left in the deck")]
    Empty,
}
