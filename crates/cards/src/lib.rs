// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Drawpoker cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use drawpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "TD".parse().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! To deal a 5-cards hand from a freshly shuffled deck together with the
//! shuffle [quality](ShuffleQuality) diagnostic:
//!
//! ```
//! # use drawpoker_cards::deal_hand;
//! let dealt = deal_hand(&mut rand::rng(), 5).unwrap();
//! assert_eq!(dealt.cards.len(), 5);
//! println!("{} ({})", dealt.cards.len(), dealt.quality.rating);
//! ```
//!
//! To iterate through all 5 cards hands:
//!
//! ```no_run
//! # use drawpoker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, DealtHand, Deck, Rank, Suit, deal_hand};

mod error;
pub use error::CardError;

mod quality;
pub use quality::{QualityRating, ShuffleQuality};
