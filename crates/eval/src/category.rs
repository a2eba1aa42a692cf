// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::EvalError;

/// The category of a 5 cards hand.
///
/// Categories are numbered from 0 to 9, 0 is used for hands with cards that
/// could not be recognized and is never a poker outcome. With the
/// jacks-or-better rules a pair lower than jacks is a [HighCard](Self::HighCard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum HandCategory {
    /// A hand with unrecognized cards.
    Invalid = 0,
    /// No pair, or a low pair with jacks-or-better rules.
    HighCard = 1,
    /// One pair, jacks or better with jacks-or-better rules.
    OnePair = 2,
    /// Two different pairs.
    TwoPair = 3,
    /// Three cards of the same rank.
    ThreeOfAKind = 4,
    /// Five cards in a sequence.
    Straight = 5,
    /// Five cards of the same suit.
    Flush = 6,
    /// Three of a kind and a pair.
    FullHouse = 7,
    /// Four cards of the same rank.
    FourOfAKind = 8,
    /// Five cards in a sequence of the same suit, includes the royal flush.
    StraightFlush = 9,
}

impl HandCategory {
    /// All the categories from lowest to highest.
    pub const ALL: [HandCategory; 10] = {
        use HandCategory::*;
        [
            Invalid,
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
    };

    /// The category number.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// The category name.
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::Invalid => "Invalid Hand",
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<HandCategory> for u8 {
    fn from(category: HandCategory) -> Self {
        category.value()
    }
}

impl TryFrom<u8> for HandCategory {
    type Error = EvalError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(EvalError::InvalidCategory(value))
    }
}
