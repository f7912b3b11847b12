// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::CardError;

/// A Poker card.
///
/// A card is identified by a seed in the `0..52` range, the face is given by
/// `seed % 13` and the suit by `seed / 13`:
///
/// ```text
///   seed  0..13  2H 3H .. AH
///   seed 13..26  2S 3S .. AS
///   seed 26..39  2D 3D .. AD
///   seed 39..52  2C 3C .. AC
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Create a card given a face and a suit.
    pub fn new(face: Face, suit: Suit) -> Card {
        Self(suit as u8 * Face::COUNT + face as u8)
    }

    /// Create a card from a seed in the `0..52` range.
    pub fn from_seed(seed: u8) -> Result<Card, CardError> {
        if seed < Face::COUNT * Suit::COUNT {
            Ok(Self(seed))
        } else {
            Err(CardError::InvalidSeed(seed))
        }
    }

    /// The seed this card was created from.
    pub fn seed(&self) -> u8 {
        self.0
    }

    /// Returns the card face.
    pub fn face(&self) -> Face {
        Face::from_index(self.0 % Face::COUNT).unwrap_or(Face::Ace)
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        // Seeds are below 52 so the quotient is a valid suit index.
        Suit::from_index(self.0 / Face::COUNT).unwrap_or(Suit::Clubs)
    }

    /// Two characters code for this card, i.e. `AH` or `TC`.
    pub fn short_label(&self) -> String {
        self.to_string()
    }

    /// Human readable name for this card, i.e. `Ace_of_Hearts`.
    pub fn label(&self) -> String {
        format!("{}_of_{}", self.face().name(), self.suit().name())
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(seed: u8) -> Result<Self, Self::Error> {
        Card::from_seed(seed)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a short label like `AH` or `tc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidLabel(s.to_string());

        let mut chars = s.chars().map(|c| c.to_ascii_uppercase());
        let (Some(fc), Some(sc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let face = Face::faces()
            .find(|face| face.to_string().starts_with(fc))
            .ok_or_else(invalid)?;
        let suit = Suit::suits()
            .find(|suit| suit.to_string().starts_with(sc))
            .ok_or_else(invalid)?;

        Ok(Card::new(face, suit))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.face(), self.suit())
    }
}

/// Card face, ordered from the lowest to the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Two
    Two = 0,
    /// Three
    Three,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Face {
    /// The number of faces.
    pub const COUNT: u8 = 13;

    /// Returns all faces from Two to Ace.
    pub fn faces() -> impl DoubleEndedIterator<Item = Face> {
        use Face::*;
        [
            Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The face index, 0 for Two up to 12 for Ace.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Returns the face for an index in the `0..13` range.
    pub fn from_index(index: u8) -> Option<Face> {
        Face::faces().nth(index as usize)
    }

    /// The face name.
    pub fn name(&self) -> &'static str {
        match self {
            Face::Two => "Two",
            Face::Three => "Three",
            Face::Four => "Four",
            Face::Five => "Five",
            Face::Six => "Six",
            Face::Seven => "Seven",
            Face::Eight => "Eight",
            Face::Nine => "Nine",
            Face::Ten => "Ten",
            Face::Jack => "Jack",
            Face::Queen => "Queen",
            Face::King => "King",
            Face::Ace => "Ace",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = match self {
            Face::Two => '2',
            Face::Three => '3',
            Face::Four => '4',
            Face::Five => '5',
            Face::Six => '6',
            Face::Seven => '7',
            Face::Eight => '8',
            Face::Nine => '9',
            Face::Ten => 'T',
            Face::Jack => 'J',
            Face::Queen => 'Q',
            Face::King => 'K',
            Face::Ace => 'A',
        };

        write!(f, "{face}")
    }
}

/// Card suit.
///
/// Suits have no ranking value, the order only defines the card seeds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 0,
    /// Spades suit.
    Spades,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: u8 = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// The suit index, 0 for Hearts up to 3 for Clubs.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Returns the suit for an index in the `0..4` range.
    pub fn from_index(index: u8) -> Option<Suit> {
        Suit::suits().nth(index as usize)
    }

    /// The suit name.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_from_seed() {
        let mut cards = HashSet::default();

        for seed in 0..52u8 {
            let card = Card::from_seed(seed).unwrap();
            assert_eq!(card.seed(), seed);
            assert_eq!(card.face().index(), seed % 13);
            assert_eq!(card.suit().index(), seed / 13);
            assert_eq!(Card::new(card.face(), card.suit()), card);
            cards.insert((card.face(), card.suit()));
        }

        // Check uniqueness.
        assert_eq!(cards.len(), 52);
    }

    #[test]
    fn card_invalid_seed() {
        assert_eq!(Card::from_seed(52), Err(CardError::InvalidSeed(52)));
        assert_eq!(Card::try_from(255u8), Err(CardError::InvalidSeed(255)));
        assert!(Card::try_from(51u8).is_ok());
    }

    #[test]
    fn card_labels() {
        let c = Card::from_seed(0).unwrap();
        assert_eq!(c.short_label(), "2H");
        assert_eq!(c.label(), "Two_of_Hearts");

        let c = Card::from_seed(12).unwrap();
        assert_eq!(c.short_label(), "AH");
        assert_eq!(c.label(), "Ace_of_Hearts");

        let c = Card::new(Face::King, Suit::Diamonds);
        assert_eq!(c.short_label(), "KD");
        assert_eq!(c.label(), "King_of_Diamonds");

        let c = Card::new(Face::Ten, Suit::Clubs);
        assert_eq!(c.to_string(), "TC");
        assert_eq!(format!("{c:?}"), "Card(TC)");

        let c = Card::from_seed(13 + 3).unwrap();
        assert_eq!(c.label(), "Five_of_Spades");
    }

    #[test]
    fn card_from_label() {
        for seed in 0..52u8 {
            let card = Card::from_seed(seed).unwrap();
            assert_eq!(card.short_label().parse::<Card>(), Ok(card));
        }

        assert_eq!("qs".parse::<Card>(), Ok(Card::new(Face::Queen, Suit::Spades)));
        assert_eq!(
            "1H".parse::<Card>(),
            Err(CardError::InvalidLabel("1H".to_string()))
        );
        assert!("AX".parse::<Card>().is_err());
        assert!("AHS".parse::<Card>().is_err());
        assert!("A".parse::<Card>().is_err());
    }

    #[test]
    fn card_serde() {
        for seed in 0..52u8 {
            let card = Card::from_seed(seed).unwrap();
            let bytes = bincode::serialize(&card).unwrap();
            assert_eq!(bytes, vec![seed]);
            assert_eq!(bincode::deserialize::<Card>(&bytes).unwrap(), card);
        }

        let err = bincode::deserialize::<Card>(&[52]).unwrap_err();
        assert_eq!(err.to_string(), CardError::InvalidSeed(52).to_string());
        assert!(bincode::deserialize::<Card>(&[255]).is_err());

        for face in Face::faces() {
            let bytes = bincode::serialize(&face).unwrap();
            assert_eq!(bincode::deserialize::<Face>(&bytes).unwrap(), face);
        }

        for suit in Suit::suits() {
            let bytes = bincode::serialize(&suit).unwrap();
            assert_eq!(bincode::deserialize::<Suit>(&bytes).unwrap(), suit);
        }
    }

    #[test]
    fn face_and_suit_indexes() {
        for (idx, face) in Face::faces().enumerate() {
            assert_eq!(face.index() as usize, idx);
            assert_eq!(Face::from_index(idx as u8), Some(face));
        }
        assert_eq!(Face::from_index(13), None);

        for (idx, suit) in Suit::suits().enumerate() {
            assert_eq!(suit.index() as usize, idx);
            assert_eq!(Suit::from_index(idx as u8), Some(suit));
        }
        assert_eq!(Suit::from_index(4), None);

        assert!(Face::Ace > Face::King);
        assert!(Face::Two < Face::Three);
    }
}
