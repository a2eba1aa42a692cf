// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Drawpoker game types.
//!
//! A [Session](session::Session) holds the state of a five cards draw video
//! poker game: the player credits, the wager, the deck, and the hand.
//!
//! ```
//! # use drawpoker_core::session::{Config, Session};
//! let mut session = Session::new(&Config { seed: Some(1), ..Config::default() });
//! let cards = session.deal().unwrap();
//!
//! // Hold the first two cards and draw the others.
//! session.toggle_hold(0).unwrap();
//! session.toggle_hold(1).unwrap();
//! let result = session.draw().unwrap();
//!
//! assert_eq!(result.cards[..2], cards[..2]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod poker;
pub mod session;
