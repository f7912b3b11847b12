// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The hand rank, ordered from the weakest to the strongest category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card
    HighCard = 0,
    /// One pair
    Pair,
    /// Two pair
    TwoPair,
    /// Three of a kind
    ThreeOfAKind,
    /// Straight
    Straight,
    /// Flush
    Flush,
    /// Full house
    FullHouse,
    /// Four of a kind
    FourOfAKind,
    /// Straight flush
    StraightFlush,
    /// Ace high straight flush
    RoyalFlush,
}

impl HandRank {
    /// Returns all ranks from High Card to Royal Flush.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The rank digit used as the leading digit of a hand value.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// The rank name.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
