// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Shuffle quality heuristic.
//!
//! The quality combines two scores in `0..=100`:
//!
//! - a runs score, where a run is an adjacent pair of cards with the same
//!   suit or with ranks that differ by one, fewer runs is better;
//! - an entropy score, the Shannon entropy of the cards in the sequence
//!   normalized by the maximum entropy for the sequence length.
//!
//! The quality is a diagnostic, a poor shuffle is still dealt.
use serde::Serialize;
use std::fmt;

use crate::Card;

/// A shuffle quality rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum QualityRating {
    /// Score at most 70.
    Poor,
    /// Score in 71..=80.
    Fair,
    /// Score in 81..=90.
    Good,
    /// Score above 90.
    Excellent,
}

impl QualityRating {
    fn from_score(score: u8) -> Self {
        if score > 90 {
            QualityRating::Excellent
        } else if score > 80 {
            QualityRating::Good
        } else if score > 70 {
            QualityRating::Fair
        } else {
            QualityRating::Poor
        }
    }
}

impl fmt::Display for QualityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QualityRating::Poor => "Poor",
            QualityRating::Fair => "Fair",
            QualityRating::Good => "Good",
            QualityRating::Excellent => "Excellent",
        };

        write!(f, "{label}")
    }
}

/// The quality of a shuffled sequence of cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShuffleQuality {
    /// The combined score in `0..=100`.
    pub score: u8,
    /// Number of suit and rank runs between adjacent cards.
    pub runs: u32,
    /// Entropy in bits of the cards distribution.
    pub entropy: f64,
    /// The rating for the score.
    pub rating: QualityRating,
}

impl ShuffleQuality {
    /// Computes the quality of a sequence of cards.
    pub fn analyze(cards: &[Card]) -> Self {
        let runs = cards
            .windows(2)
            .map(|w| {
                let (prev, curr) = (w[0], w[1]);
                let suit_run = prev.suit_bits() == curr.suit_bits();
                let rank_run = prev.rank_bits().abs_diff(curr.rank_bits()) == 1;
                suit_run as u32 + rank_run as u32
            })
            .sum::<u32>();

        let entropy = entropy(cards);

        let (run_score, entropy_score) = if cards.len() < 2 {
            (100.0, 100.0)
        } else {
            let max_runs = (cards.len() - 1) as f64;
            let run_score = (100.0 * (1.0 - runs as f64 / max_runs)).clamp(0.0, 100.0);
            let entropy_score = 100.0 * entropy / (cards.len() as f64).log2();
            (run_score, entropy_score)
        };

        let score = ((run_score + entropy_score) / 2.0).round().clamp(0.0, 100.0) as u8;

        Self {
            score,
            runs,
            entropy,
            rating: QualityRating::from_score(score),
        }
    }
}

impl fmt::Display for ShuffleQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (score {}, runs {}, entropy {:.2})",
            self.rating, self.score, self.runs, self.entropy
        )
    }
}

/// Shannon entropy in bits of the cards occurrences.
fn entropy(cards: &[Card]) -> f64 {
    let mut counts = [0u32; 52];
    for card in cards {
        counts[card.id() as usize] += 1;
    }

    let len = cards.len() as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / len;
            -p * p.log2()
        })
        .sum()
}
