// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Drawpoker CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use std::io;

use drawpoker_cards::deal_hand;
use drawpoker_core::session::Config;
use drawpoker_eval::{Paytable, Rules, Wager, evaluate_value};

pub mod terminal;

#[derive(Debug, Parser)]
#[clap(version, about = "Five cards draw video poker.")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct RulesArgs {
    /// Don't count A-2-3-4-5 as a straight.
    #[clap(long)]
    no_wheel: bool,
    /// Any pair is one pair, not only jacks or better.
    #[clap(long)]
    any_pair: bool,
}

impl RulesArgs {
    fn rules(&self) -> Rules {
        Rules {
            ace_low_straight: !self.no_wheel,
            jacks_or_better: !self.any_pair,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play video poker in the terminal.
    Play {
        /// The starting credits.
        #[clap(long, short, default_value_t = 100)]
        credits: u32,
        /// Coins wagered on each hand.
        #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=5))]
        wager: u8,
        /// Seed for reproducible shuffles.
        #[clap(long)]
        seed: Option<u64>,
        #[clap(flatten)]
        rules: RulesArgs,
    },
    /// Deal cards from a shuffled deck.
    Deal {
        /// Number of cards to deal.
        #[clap(long, short = 'n', default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=52))]
        count: u8,
        /// Seed for reproducible shuffles.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Evaluate a hand given as a JSON array, i.e. '["AS","KS","QS","JS","TS"]'.
    Eval {
        /// The JSON hand.
        hand: String,
        #[clap(flatten)]
        rules: RulesArgs,
    },
    /// Print the paytable.
    Paytable {
        #[clap(flatten)]
        rules: RulesArgs,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play {
            credits,
            wager,
            seed,
            rules,
        } => {
            let config = Config {
                rules: rules.rules(),
                credits,
                wager: Wager::new(wager)?,
                seed,
            };

            terminal::run(config)?;
        }
        Command::Deal { count, seed } => {
            let count = count as usize;
            let dealt = match seed {
                Some(seed) => deal_hand(&mut StdRng::seed_from_u64(seed), count)?,
                None => deal_hand(&mut rand::rng(), count)?,
            };

            let cards = dealt
                .cards
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>();
            println!("Hand: {}", cards.join(" "));
            println!("Shuffle quality: {}", dealt.quality);
        }
        Command::Eval { hand, rules } => {
            let value: serde_json::Value =
                serde_json::from_str(&hand).context("hand is not valid JSON")?;
            let category = evaluate_value(&value, rules.rules())?;
            println!("{} {}", category.value(), category);
        }
        Command::Paytable { rules } => {
            terminal::write_paytable(&mut io::stdout(), &Paytable::default(), rules.rules())?;
        }
    }

    Ok(())
}
