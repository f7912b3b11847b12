// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand errors.
use thiserror::Error;

use crate::{Card, Hand};

/// Errors that can occur when filling or evaluating a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand must have 5 cards to be evaluated.
    #[error("hand has {len} cards, {} are needed for evaluation", Hand::SIZE)]
    Incomplete {
        /// Number of cards in the hand.
        len: usize,
    },
    /// The hand already has 5 cards.
    #[error("hand is full")]
    Full,
    /// The card is already in the hand.
    #[error("card {0} is already in the hand")]
    DuplicateCard(Card),
}
