// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video poker game session.
//!
//! A session alternates between two phases:
//!
//! - [Phase::Betting]: the player can change the wager and deal a hand, the
//!   wager is taken from the credits when the hand is dealt;
//! - [Phase::Holding]: the player chooses the cards to hold, on draw the other
//!   cards are replaced with cards from the same deck and the hand is paid.
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use thiserror::Error;

use drawpoker_cards::ShuffleQuality;
use drawpoker_eval::HAND_SIZE;

use crate::poker::{Card, Credits, Deck, HandValue, Paytable, Rank, Rules, Suit, Wager};

/// Session configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The hand evaluation rules.
    pub rules: Rules,
    /// The starting credits.
    pub credits: u32,
    /// The starting wager.
    pub wager: Wager,
    /// Seed for reproducible shuffles.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            credits: 100,
            wager: Wager::MAX,
            seed: None,
        }
    }
}

/// Session errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The credits don't cover the wager.
    #[error("not enough credits {credits} for a {wager} coins wager")]
    InsufficientCredits {
        /// The current wager.
        wager: Wager,
        /// The available credits.
        credits: Credits,
    },
    /// A hand must be dealt first.
    #[error("no hand has been dealt")]
    NotDealt,
    /// The hand has been dealt and must be drawn first.
    #[error("a hand has already been dealt")]
    AlreadyDealt,
    /// The card position is not in the hand.
    #[error("invalid card position {0}")]
    InvalidPosition(usize),
    /// The deck has no more cards.
    #[error("the deck has no more cards")]
    DeckExhausted,
}

/// The session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a deal.
    Betting,
    /// A hand has been dealt and the player is choosing the cards to hold.
    Holding,
}

/// The result of a drawn hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandResult {
    /// The final hand.
    pub cards: [Card; HAND_SIZE],
    /// The final hand value.
    pub value: HandValue,
    /// The hand wager.
    pub wager: Wager,
    /// The credits won.
    pub winnings: Credits,
}

/// A video poker game session.
#[derive(Debug)]
pub struct Session {
    rules: Rules,
    paytable: Paytable,
    credits: Credits,
    wager: Wager,
    deck: Deck,
    hand: Option<[Card; HAND_SIZE]>,
    held: [bool; HAND_SIZE],
    phase: Phase,
    last_result: Option<HandResult>,
    rng: StdRng,
}

impl Session {
    /// Creates a new session.
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self::with_rng(config, rng)
    }

    /// Creates a new session with user initialized randomness.
    fn with_rng(config: &Config, rng: StdRng) -> Self {
        Self {
            rules: config.rules,
            paytable: Paytable::jacks_or_better(),
            credits: Credits::new(config.credits),
            wager: config.wager,
            deck: Deck::default(),
            hand: None,
            held: [false; HAND_SIZE],
            phase: Phase::Betting,
            last_result: None,
            rng,
        }
    }

    /// Sets the wager for the next hand.
    pub fn set_wager(&mut self, wager: Wager) -> Result<(), GameError> {
        if self.phase == Phase::Holding {
            return Err(GameError::AlreadyDealt);
        }

        self.wager = wager;
        Ok(())
    }

    /// Takes the wager from the credits and deals a new hand from a freshly
    /// shuffled deck.
    pub fn deal(&mut self) -> Result<[Card; HAND_SIZE], GameError> {
        if self.phase == Phase::Holding {
            return Err(GameError::AlreadyDealt);
        }

        if !self.can_deal() {
            return Err(GameError::InsufficientCredits {
                wager: self.wager,
                credits: self.credits,
            });
        }

        self.deck = Deck::shuffled(&mut self.rng);
        debug!(
            "Shuffle quality {}",
            ShuffleQuality::analyze(self.deck.cards())
        );

        let mut cards = [Card::new(Rank::Deuce, Suit::Clubs); HAND_SIZE];
        for card in cards.iter_mut() {
            *card = self.deck.deal().ok_or(GameError::DeckExhausted)?;
        }

        self.credits -= Credits::from(self.wager);
        self.hand = Some(cards);
        self.held = [false; HAND_SIZE];
        self.phase = Phase::Holding;
        self.last_result = None;

        info!(
            "Dealt {} wager {} credits {}",
            format_cards(&cards),
            self.wager,
            self.credits
        );

        Ok(cards)
    }

    /// Toggles the hold for the card at the given position, returns true if
    /// the card is now held.
    pub fn toggle_hold(&mut self, position: usize) -> Result<bool, GameError> {
        if self.phase != Phase::Holding {
            return Err(GameError::NotDealt);
        }

        let held = self
            .held
            .get_mut(position)
            .ok_or(GameError::InvalidPosition(position))?;
        *held = !*held;

        debug!("Card {} held {}", position + 1, *held);
        Ok(*held)
    }

    /// Replaces the cards that are not held, evaluates the hand, and pays
    /// the winnings.
    pub fn draw(&mut self) -> Result<HandResult, GameError> {
        let Some(mut cards) = self.hand.filter(|_| self.phase == Phase::Holding) else {
            return Err(GameError::NotDealt);
        };

        for (card, held) in cards.iter_mut().zip(self.held) {
            if !held {
                *card = self.deck.deal().ok_or(GameError::DeckExhausted)?;
            }
        }

        let value = HandValue::eval(&cards, self.rules);
        let winnings = Credits::new(self.paytable.payout(&value, self.wager));
        self.credits += winnings;
        self.hand = Some(cards);
        self.phase = Phase::Betting;

        info!(
            "Drawn {} {}{} won {} credits {}",
            format_cards(&cards),
            value.category(),
            if value.is_royal() { " (royal)" } else { "" },
            winnings,
            self.credits
        );

        let result = HandResult {
            cards,
            value,
            wager: self.wager,
            winnings,
        };

        self.last_result = Some(result.clone());
        Ok(result)
    }

    /// Checks if the credits cover the wager.
    pub fn can_deal(&self) -> bool {
        self.credits >= Credits::from(self.wager)
    }

    /// The session phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current credits.
    pub fn credits(&self) -> Credits {
        self.credits
    }

    /// The current wager.
    pub fn wager(&self) -> Wager {
        self.wager
    }

    /// The session rules.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// The session paytable.
    pub fn paytable(&self) -> &Paytable {
        &self.paytable
    }

    /// The last dealt or drawn hand.
    pub fn hand(&self) -> Option<&[Card; HAND_SIZE]> {
        self.hand.as_ref()
    }

    /// The held cards flags.
    pub fn held(&self) -> &[bool; HAND_SIZE] {
        &self.held
    }

    /// The result of the last drawn hand, reset on deal.
    pub fn last_result(&self) -> Option<&HandResult> {
        self.last_result.as_ref()
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
