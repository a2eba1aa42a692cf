// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

/// Errors returned when parsing cards or dealing from a deck.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// The token is not a rank character followed by a suit character.
    #[error("invalid card format {0:?}")]
    InvalidCardFormat(String),
    /// The requested hand size is outside `1..=52`.
    #[error("invalid hand size {0}, hand size must be between 1 and 52 cards")]
    InvalidHandSize(usize),
}
