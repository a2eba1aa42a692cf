// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator accumulates three values for a 5 cards hand:
//!
//! ```text
//!   suits  = 4 bits set, one bit for each suit in the hand
//!   ranks  = 13 bits set, one bit for each rank in the hand
//!   counts = number of cards for each rank
//! ```
//!
//! A hand is a flush if `suits` has a single bit set, and a straight if
//! `ranks` is one of the nine 5 consecutive bits windows from 2-3-4-5-6 to
//! T-J-Q-K-A, or the A-2-3-4-5 wheel when [Rules::ace_low_straight] is set.
//! Pairs, sets, and quads come from the `counts`.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Card, EvalError, HandCategory, Rank, Suit};

/// The number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Creates the rank bitmasks for the straights from 2-3-4-5-6 to T-J-Q-K-A.
const fn make_straights() -> [u16; 9] {
    let mut t = [0u16; 9];
    let mut start = 0;

    while start < 9 {
        t[start] = 0b1_1111 << start;
        start += 1;
    }

    t
}

const STRAIGHTS: [u16; 9] = make_straights();

/// Rank mask for the wheel (Ace, two, three, four, five).
const WHEEL: u16 = 0b1_0000_0000_1111;

/// Rank mask for ten, jack, queen, king, ace.
const BROADWAY: u16 = 0b1_1111_0000_0000;

/// Evaluation rules that vary between paytables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Count A-2-3-4-5 as a straight.
    pub ace_low_straight: bool,
    /// A single pair is a [HandCategory::OnePair] only if it is jacks or
    /// higher, lower pairs are a [HandCategory::HighCard].
    pub jacks_or_better: bool,
}

impl Rules {
    /// Rules with no wheel straight and any pair counting as one pair.
    pub const fn plain() -> Self {
        Self {
            ace_low_straight: false,
            jacks_or_better: false,
        }
    }
}

impl Default for Rules {
    /// The jacks-or-better video poker rules.
    fn default() -> Self {
        Self {
            ace_low_straight: true,
            jacks_or_better: true,
        }
    }
}

/// The value of a 5 cards hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandValue {
    category: HandCategory,
    royal: bool,
}

impl HandValue {
    /// Evaluates a 5 cards hand.
    ///
    /// The evaluator doesn't check for duplicated cards, five copies of the
    /// same card have a rank with five cards and are a four of a kind.
    pub fn eval(cards: &[Card; HAND_SIZE], rules: Rules) -> Self {
        let mut suits = 0u8;
        let mut ranks = 0u16;
        let mut counts = [0u8; 13];

        for card in cards {
            suits |= card.suit_bit();
            ranks |= card.rank_bit();
            counts[card.rank_bits() as usize] += 1;
        }

        let is_flush = suits.count_ones() == 1;
        let is_straight =
            STRAIGHTS.contains(&ranks) || (rules.ace_low_straight && ranks == WHEEL);

        let (mut pairs, mut threes, mut fours) = (0, 0, 0);
        let mut high_pair = false;
        for (rank, &count) in counts.iter().enumerate() {
            match count {
                2 => {
                    pairs += 1;
                    high_pair |= rank >= Rank::Jack as usize;
                }
                3 => threes += 1,
                4..=5 => fours += 1,
                _ => {}
            }
        }

        let category = if is_flush && is_straight {
            HandCategory::StraightFlush
        } else if fours > 0 {
            HandCategory::FourOfAKind
        } else if threes > 0 && pairs > 0 {
            HandCategory::FullHouse
        } else if is_flush {
            HandCategory::Flush
        } else if is_straight {
            HandCategory::Straight
        } else if threes > 0 {
            HandCategory::ThreeOfAKind
        } else if pairs == 2 {
            HandCategory::TwoPair
        } else if pairs == 1 && (high_pair || !rules.jacks_or_better) {
            HandCategory::OnePair
        } else {
            HandCategory::HighCard
        };

        Self {
            category,
            royal: category == HandCategory::StraightFlush && ranks == BROADWAY,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Checks if the hand is a royal flush.
    pub fn is_royal(&self) -> bool {
        self.royal
    }
}

/// Evaluates a hand of card tokens.
///
/// Fails if there are not 5 tokens or if a token is not 2 characters long,
/// a token with an unknown rank or suit evaluates to [HandCategory::Invalid].
pub fn evaluate_hand<S: AsRef<str>>(
    cards: &[S],
    rules: Rules,
) -> Result<HandCategory, EvalError> {
    if cards.len() != HAND_SIZE {
        return Err(EvalError::WrongCardCount(cards.len()));
    }

    if let Some(token) = cards
        .iter()
        .map(AsRef::<str>::as_ref)
        .find(|token| token.chars().count() != 2)
    {
        return Err(EvalError::MalformedCard(token.to_string()));
    }

    let mut hand = [Card::new(Rank::Deuce, Suit::Clubs); HAND_SIZE];
    for (card, token) in hand.iter_mut().zip(cards) {
        match token.as_ref().parse() {
            Ok(c) => *card = c,
            Err(_) => return Ok(HandCategory::Invalid),
        }
    }

    Ok(HandValue::eval(&hand, rules).category())
}

/// Evaluates a hand from a JSON value.
///
/// The value must be an array of 5 strings of 2 characters each.
pub fn evaluate_value(value: &Value, rules: Rules) -> Result<HandCategory, EvalError> {
    let Value::Array(items) = value else {
        return Err(EvalError::NotASequence);
    };

    if items.len() != HAND_SIZE {
        return Err(EvalError::WrongCardCount(items.len()));
    }

    let tokens = items
        .iter()
        .map(|item| match item {
            Value::String(token) => Ok(token.as_str()),
            other => Err(EvalError::MalformedCard(other.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    evaluate_hand(&tokens, rules)
}
