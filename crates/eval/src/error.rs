// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation and payout errors.
use thiserror::Error;

/// Errors for hands that don't have the shape of a 5 cards hand.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The input is not a sequence of cards.
    #[error("input must be a sequence of cards")]
    NotASequence,
    /// The hand doesn't have 5 cards.
    #[error("hand must contain exactly 5 cards, found {0}")]
    WrongCardCount(usize),
    /// A card is not a 2 characters string.
    #[error("each card must be a 2-character string (rank + suit), found {0}")]
    MalformedCard(String),
    /// The value is not a hand category number.
    #[error("invalid hand category {0}")]
    InvalidCategory(u8),
}

/// Payout lookup errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayoutError {
    /// The wager is not between 1 and 5 coins.
    #[error("invalid wager {0}, wager must be between 1 and 5 coins")]
    InvalidWager(u8),
}
