// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Paytable and wagers.
//!
//! The jacks-or-better schedule pays each category linearly with the number
//! of coins wagered, except for the royal flush that pays a 4000 coins
//! jackpot when 5 coins are wagered.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{HandCategory, HandValue, PayoutError, Rules};

/// A wager in coins, between 1 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Wager(u8);

impl Wager {
    /// The minimum wager.
    pub const MIN: Wager = Wager(1);
    /// The maximum wager.
    pub const MAX: Wager = Wager(5);

    /// Creates a wager with the given number of coins.
    pub fn new(coins: u8) -> Result<Self, PayoutError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&coins) {
            Ok(Self(coins))
        } else {
            Err(PayoutError::InvalidWager(coins))
        }
    }

    /// The number of coins.
    pub fn coins(&self) -> u8 {
        self.0
    }

    /// The next higher wager, wraps to the minimum after the maximum.
    pub fn next(self) -> Self {
        if self == Self::MAX {
            Self::MIN
        } else {
            Self(self.0 + 1)
        }
    }

    /// The next lower wager, wraps to the maximum before the minimum.
    pub fn prev(self) -> Self {
        if self == Self::MIN {
            Self::MAX
        } else {
            Self(self.0 - 1)
        }
    }

    fn column(self) -> usize {
        self.0 as usize - 1
    }
}

impl Default for Wager {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for Wager {
    type Error = PayoutError;

    fn try_from(coins: u8) -> Result<Self, Self::Error> {
        Self::new(coins)
    }
}

impl From<Wager> for u8 {
    fn from(wager: Wager) -> Self {
        wager.0
    }
}

impl fmt::Display for Wager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The payouts for each category and wager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paytable {
    categories: [[u32; 5]; 10],
    royal: [u32; 5],
}

/// The standard jacks-or-better paytable.
const JACKS_OR_BETTER: Paytable = Paytable {
    categories: [
        [0, 0, 0, 0, 0],           // Invalid
        [0, 0, 0, 0, 0],           // High card
        [1, 2, 3, 4, 5],           // One pair
        [2, 4, 6, 8, 10],          // Two pair
        [3, 6, 9, 12, 15],         // Three of a kind
        [4, 8, 12, 16, 20],        // Straight
        [6, 12, 18, 24, 30],       // Flush
        [9, 18, 27, 36, 45],       // Full house
        [25, 50, 75, 100, 125],    // Four of a kind
        [50, 100, 150, 200, 250],  // Straight flush
    ],
    royal: [250, 500, 750, 1000, 4000],
};

impl Paytable {
    /// The jacks-or-better paytable.
    pub const fn jacks_or_better() -> Self {
        JACKS_OR_BETTER
    }

    /// The payout for a category, a royal flush is paid as a straight flush.
    pub fn category_payout(&self, category: HandCategory, wager: Wager) -> u32 {
        self.categories[category as usize][wager.column()]
    }

    /// The payout for a hand, a royal flush is paid from the royal row.
    pub fn payout(&self, value: &HandValue, wager: Wager) -> u32 {
        if value.is_royal() {
            self.royal[wager.column()]
        } else {
            self.category_payout(value.category(), wager)
        }
    }

    /// The paying rows from highest to lowest with a label and the payouts
    /// for 1 to 5 coins, the pair row label depends on the rules.
    pub fn rows(&self, rules: Rules) -> Vec<(&'static str, [u32; 5])> {
        let mut rows = vec![("Royal Flush", self.royal)];
        rows.extend(
            HandCategory::ALL
                .iter()
                .rev()
                .map(|&c| {
                    let label = match c {
                        HandCategory::OnePair if rules.jacks_or_better => "Jacks or Better",
                        c => c.name(),
                    };
                    (label, self.categories[c as usize])
                })
                .filter(|(_, payouts)| payouts.iter().any(|&p| p > 0)),
        );
        rows
    }
}

impl Default for Paytable {
    fn default() -> Self {
        Self::jacks_or_better()
    }
}

/// Returns the winnings for a category and a wager in `1..=5` coins using
/// the jacks-or-better paytable.
///
/// The royal flush is not distinguished from other straight flushes, use
/// [Paytable::payout] to pay the royal jackpot.
pub fn resolve_payout(category: HandCategory, wager_level: u8) -> Result<u32, PayoutError> {
    let wager = Wager::new(wager_level)?;
    Ok(JACKS_OR_BETTER.category_payout(category, wager))
}
