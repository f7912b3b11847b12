// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Deals hands from a shuffled deck and shows the winners.
//
// ```bash
// $ cargo r --example deal -- --hands 4 --seed 42
// ```
use anyhow::Result;
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use fivecard_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of hands to deal.
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=10))]
    hands: u8,
    /// Seed for a reproducible shuffle.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let mut deck = match cli.seed {
        Some(seed) => {
            info!("Shuffling deck with seed {seed}");
            Deck::new_and_shuffled(&mut StdRng::seed_from_u64(seed))
        }
        None => Deck::new(),
    };

    let mut hands = Vec::with_capacity(cli.hands as usize);
    for _ in 0..cli.hands {
        let mut hand = Hand::new();
        for _ in 0..Hand::SIZE {
            hand.add_card(deck.deal()?)?;
        }

        hands.push(hand);
    }

    let mut best = 0;
    for (idx, hand) in hands.iter().enumerate() {
        let value = hand.value()?;
        best = best.max(value);
        println!("Hand {:<2} {:<36} {value:>11}", idx + 1, hand.display_string());
    }

    for (idx, hand) in hands.iter().enumerate() {
        if hand.value()? == best {
            println!("Winner: hand {} with {}", idx + 1, hand.rank()?);
        }
    }

    info!("{} cards left in the deck", deck.count());

    Ok(())
}
