// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Drawpoker hand evaluator.
//!
//! Classifies 5 cards poker hands into one of ten [HandCategory] using bit
//! sets of the hand ranks and suits, and maps a category and a wager to the
//! winnings with a [Paytable].
//!
//! To evaluate a hand and get its payout:
//!
//! ```
//! # use drawpoker_eval::*;
//! let cards = ["AS", "KS", "QS", "JS", "TS"].map(|t| t.parse::<Card>().unwrap());
//! let value = HandValue::eval(&cards, Rules::default());
//! assert_eq!(value.category(), HandCategory::StraightFlush);
//! assert!(value.is_royal());
//!
//! let paytable = Paytable::jacks_or_better();
//! assert_eq!(paytable.payout(&value, Wager::MAX), 4000);
//! ```
//!
//! Hands in their textual form are evaluated with [evaluate_hand], tokens
//! with an unknown rank or suit evaluate to [HandCategory::Invalid]:
//!
//! ```
//! # use drawpoker_eval::*;
//! let hand = ["7H", "7D", "7S", "7C", "JD"];
//! assert_eq!(evaluate_hand(&hand, Rules::default()), Ok(HandCategory::FourOfAKind));
//!
//! let hand = ["XX", "KS", "QS", "JS", "TS"];
//! assert_eq!(evaluate_hand(&hand, Rules::default()), Ok(HandCategory::Invalid));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod category;
pub use category::HandCategory;

pub mod eval;
pub use eval::{HAND_SIZE, HandValue, Rules, evaluate_hand, evaluate_value};

mod error;
pub use error::{EvalError, PayoutError};

pub mod payout;
pub use payout::{Paytable, Wager, resolve_payout};

// Reexport cards types.
pub use drawpoker_cards::{Card, Deck, Rank, Suit};
