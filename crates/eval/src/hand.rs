// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand evaluator.
//!
//! A [Hand] is filled one card at a time and is evaluated when the fifth card
//! is added. The evaluation computes the hand [HandRank] and a value that
//! orders hands by strength, the value is the rank digit followed by five
//! 2-digits faces in tiebreak order:
//!
//! ```text
//!   Full House KKK22    6 11 11 11 00 00 -> 61111110000
//!   Straight   5432A    4 03 02 01 00 12 -> 40302010012
//! ```
//!
//! with faces grouped by number of occurrences and ordered from the highest to
//! the lowest within each group. For the wheel straight (A-2-3-4-5) the ace is
//! moved to the end so that it counts as the lowest card.
use log::{debug, trace};
use std::fmt;

use crate::{Card, Face, HandError, HandRank};

/// A five cards Poker hand.
#[derive(Debug, Clone)]
pub struct Hand {
    /// The cards sorted by descending face.
    cards: Vec<Card>,
    /// The rank and value, set when the hand is complete.
    eval: Option<(HandRank, u64)>,
}

impl Hand {
    /// The number of cards in a complete hand.
    pub const SIZE: usize = 5;

    /// Creates an empty hand.
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(Self::SIZE),
            eval: None,
        }
    }

    /// Creates a hand from a slice of cards.
    pub fn from_cards(cards: &[Card]) -> Result<Self, HandError> {
        let mut hand = Self::new();
        for &card in cards {
            hand.add_card(card)?;
        }

        Ok(hand)
    }

    /// Adds a card keeping the cards sorted by descending face.
    ///
    /// When the fifth card is added the hand is evaluated, a full hand doesn't
    /// accept more cards and its rank and value never change.
    pub fn add_card(&mut self, card: Card) -> Result<(), HandError> {
        if self.is_complete() {
            return Err(HandError::Full);
        }

        if self.cards.contains(&card) {
            return Err(HandError::DuplicateCard(card));
        }

        // Insert after all the cards with the same or higher face.
        let index = self
            .cards
            .iter()
            .position(|c| c.face() < card.face())
            .unwrap_or(self.cards.len());
        self.cards.insert(index, card);
        trace!("Added {card} to hand at position {index}");

        if self.cards.len() == Self::SIZE {
            let rank = self.eval_rank();
            let value = self.eval_value(rank);
            self.eval = Some((rank, value));
            debug!("Evaluated {self} value {value}");
        }

        Ok(())
    }

    /// The hand rank.
    pub fn rank(&self) -> Result<HandRank, HandError> {
        self.eval.map(|(rank, _)| rank).ok_or_else(|| self.incomplete())
    }

    /// The hand value, a higher value is a stronger hand.
    pub fn value(&self) -> Result<u64, HandError> {
        self.eval.map(|(_, value)| value).ok_or_else(|| self.incomplete())
    }

    /// Gets the card at the given position in descending face order.
    pub fn card(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// The cards sorted by descending face.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the hand has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Checks if the hand has been evaluated.
    pub fn is_complete(&self) -> bool {
        self.eval.is_some()
    }

    /// The hand rank name followed by the cards short labels, i.e.
    /// `Royal Flush AH KH QH JH TH`.
    pub fn display_string(&self) -> String {
        self.to_string()
    }

    fn incomplete(&self) -> HandError {
        HandError::Incomplete {
            len: self.cards.len(),
        }
    }

    fn contains_face(&self, face: Face) -> bool {
        self.cards.iter().any(|c| c.face() == face)
    }

    fn eval_rank(&self) -> HandRank {
        // Number of cards pairs with the same face, this is unique for each
        // hand with repeated faces: a triple counts 3 pairs and quads count 6.
        let pairs = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, c1)| {
                self.cards[i + 1..]
                    .iter()
                    .filter(|c2| c1.face() == c2.face())
                    .count()
            })
            .sum::<usize>();

        match pairs {
            1 => return HandRank::Pair,
            2 => return HandRank::TwoPair,
            3 => return HandRank::ThreeOfAKind,
            4 => return HandRank::FullHouse,
            6 => return HandRank::FourOfAKind,
            _ => {}
        }

        match (self.is_straight(), self.is_flush()) {
            (true, true) if self.contains_face(Face::Ace) && self.contains_face(Face::King) => {
                HandRank::RoyalFlush
            }
            (true, true) => HandRank::StraightFlush,
            (false, true) => HandRank::Flush,
            (true, false) => HandRank::Straight,
            (false, false) => HandRank::HighCard,
        }
    }

    fn is_straight(&self) -> bool {
        // An ace followed by a five is the start of the wheel.
        const WHEEL_GAP: u8 = Face::Ace as u8 - Face::Five as u8;

        self.cards.windows(2).all(|w| {
            let (hi, lo) = (w[0].face(), w[1].face());
            let gap = hi.index().saturating_sub(lo.index());
            gap == 1 || (hi == Face::Ace && gap == WHEEL_GAP)
        })
    }

    fn is_flush(&self) -> bool {
        self.cards.windows(2).all(|w| w[0].suit() == w[1].suit())
    }

    fn eval_value(&self, rank: HandRank) -> u64 {
        let mut counts = [0usize; Face::COUNT as usize];
        for card in &self.cards {
            counts[card.face() as usize] += 1;
        }

        // Faces that appear most go first, higher faces first on equal count.
        let mut faces = Vec::with_capacity(Self::SIZE);
        for count in (1..=4).rev() {
            for face in Face::faces().rev() {
                if counts[face as usize] == count {
                    faces.extend(std::iter::repeat_n(face, count));
                }
            }
        }

        let is_wheel = matches!(rank, HandRank::Straight | HandRank::StraightFlush)
            && self.contains_face(Face::Ace)
            && self.contains_face(Face::Five);
        if is_wheel {
            faces = vec![Face::Five, Face::Four, Face::Three, Face::Two, Face::Ace];
        }

        faces
            .iter()
            .fold(rank.index() as u64, |value, face| value * 100 + face.index() as u64)
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Hand {
    /// Shows the rank name only when the hand is complete.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if let Some((rank, _)) = self.eval {
            write!(f, "{rank}")?;
            sep = " ";
        }

        for card in &self.cards {
            write!(f, "{sep}{card}")?;
            sep = " ";
        }

        Ok(())
    }
}
