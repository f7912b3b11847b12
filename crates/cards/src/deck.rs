// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A shuffled deck of cards.
use log::{debug, trace};
use rand::prelude::*;
use std::collections::{VecDeque, vec_deque};

use crate::{Card, DeckError, Face, Suit};

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new deck shuffled with the thread random generator.
    pub fn new() -> Self {
        Self::new_and_shuffled(&mut rand::rng())
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.make_contiguous().shuffle(rng);
        debug!("Shuffled deck with {} cards", deck.cards.len());
        deck
    }

    /// Deals the card at the top of the deck.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop_front().ok_or(DeckError::Empty)?;
        trace!("Dealt {card}, {} cards left", self.cards.len());
        Ok(card)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Calls the `f` closure for each k-cards hand of the cards left in the deck.
    ///
    /// Panics if k is not 1 <= k <= 5.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=5).contains(&k), "1 <= k <= 5");

        if k > self.cards.len() {
            return;
        }

        let n = self.cards.len();
        let mut h = [Card::new(Face::Ace, Suit::Hearts); 5];

        for c1 in 0..n {
            h[0] = self.cards[c1];

            if k == 1 {
                f(&h[0..k]);
                continue;
            }

            for c2 in (c1 + 1)..n {
                h[1] = self.cards[c2];

                if k == 2 {
                    f(&h[0..k]);
                    continue;
                }

                for c3 in (c2 + 1)..n {
                    h[2] = self.cards[c3];

                    if k == 3 {
                        f(&h[0..k]);
                        continue;
                    }

                    for c4 in (c3 + 1)..n {
                        h[3] = self.cards[c4];

                        if k == 4 {
                            f(&h[0..k]);
                            continue;
                        }

                        for c5 in (c4 + 1)..n {
                            h[4] = self.cards[c5];
                            f(&h[0..k]);
                        }
                    }
                }
            }
        }
    }
}

impl Default for Deck {
    /// An unshuffled deck with the cards in seed order.
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Face::faces().map(move |f| Card::new(f, s)))
            .collect::<VecDeque<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn default_deck_in_seed_order() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        for (seed, card) in deck.into_iter().enumerate() {
            assert_eq!(card.seed() as usize, seed);
        }
    }

    #[test]
    fn shuffled_deck_has_all_cards() {
        let deck = Deck::new();
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck
            .into_iter()
            .map(|c| (c.face(), c.suit()))
            .collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deal_all_cards() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while !deck.is_empty() {
            let before = deck.count();
            cards.insert(deck.deal().unwrap());
            assert_eq!(deck.count(), before - 1);
        }

        assert_eq!(cards.len(), Deck::SIZE);
        assert_eq!(deck.deal(), Err(DeckError::Empty));
        assert_eq!(deck.deal(), Err(DeckError::Empty));
        assert_eq!(deck.count(), 0);
    }

    #[test]
    fn deal_from_top() {
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        let order = deck.clone().into_iter().collect::<Vec<_>>();

        for card in order {
            assert_eq!(deck.deal(), Ok(card));
        }
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let d3 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(43));

        let d1 = d1.into_iter().collect::<Vec<_>>();
        assert_eq!(d1, d2.into_iter().collect::<Vec<_>>());
        assert_ne!(d1, d3.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_after_deal() {
        let mut deck = Deck::default();
        deck.deal().unwrap();
        deck.deal().unwrap();

        let mut count = 0;
        deck.for_each(1, |_| count += 1);
        assert_eq!(count, 50);

        count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 2_118_760);
    }
}
