// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{CardError, ShuffleQuality};

/// A Poker card.
///
/// A card is packed in a single byte with the following format:
///
/// ```text
///   +--------+
///   |xxssrrrr|
///   +--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
///
/// The textual form of a card is a 2 characters token, the rank followed by
/// the suit (i.e. "AS" for the ace of spades), this is also the card serde
/// representation.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(u8);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self((rank as u8) | ((suit as u8) << 4))
    }

    /// This card unique id in `0..52`, cards are numbered by suit first.
    pub fn id(&self) -> u8 {
        self.suit_bits() * 13 + self.rank_bits()
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::ALL[self.suit_bits() as usize]
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[self.rank_bits() as usize]
    }

    /// Returns the rank bits.
    #[inline]
    pub fn rank_bits(&self) -> u8 {
        self.0 & 0xf
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        (self.0 >> 4) & 0x3
    }

    /// Returns the rank as a single bit in a 13 bits rank set.
    #[inline]
    pub fn rank_bit(&self) -> u16 {
        1 << self.rank_bits()
    }

    /// Returns the suit as a single bit in a 4 bits suit set.
    #[inline]
    pub fn suit_bit(&self) -> u8 {
        1 << self.suit_bits()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => match (Rank::from_char(r), Suit::from_char(s)) {
                (Some(rank), Some(suit)) => Ok(Card::new(rank, suit)),
                _ => Err(CardError::InvalidCardFormat(token.to_string())),
            },
            _ => Err(CardError::InvalidCardFormat(token.to_string())),
        }
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// All ranks from deuce to ace.
    pub const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Parses a rank character, only uppercase letters are accepted.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }

    /// The rank character.
    pub fn to_char(self) -> char {
        match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl Suit {
    /// All suits.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// Parses a suit character, only uppercase letters are accepted.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }

    /// The suit character.
    pub fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A cards Deck
///
/// Cards are dealt from the top of the deck that is the first card in
/// [Deck::cards].
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the remaining cards with the Fisher-Yates algorithm.
    ///
    /// Each card at position `i`, from the last down to the second, is swapped
    /// with a card at a uniformly chosen position in `0..=i`.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Deals a card from the top of the deck.
    pub fn deal(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards in the deck from top to bottom.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calls the `f` closure for each k-cards combination in the deck.
    ///
    /// Does nothing if k is zero or greater than the number of cards.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        let n = self.cards.len();
        if k == 0 || k > n {
            return;
        }

        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // Rightmost position that has not reached its last value.
            let Some(pos) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                break;
            };

            idx[pos] += 1;
            for i in pos + 1..k {
                idx[i] = idx[i - 1] + 1;
            }

            for i in pos..k {
                hand[i] = self.cards[idx[i]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// A hand dealt from a freshly shuffled deck.
#[derive(Debug, Clone, Serialize)]
pub struct DealtHand {
    /// The dealt cards.
    pub cards: Vec<Card>,
    /// The quality of the shuffle the cards were dealt from.
    pub quality: ShuffleQuality,
}

/// Deals the first `count` cards of a freshly shuffled deck.
///
/// The shuffle quality is computed on the whole shuffled deck, it is a
/// diagnostic and doesn't change the dealt cards.
pub fn deal_hand<R: Rng>(rng: &mut R, count: usize) -> Result<DealtHand, CardError> {
    if !(1..=Deck::SIZE).contains(&count) {
        return Err(CardError::InvalidHandSize(count));
    }

    let deck = Deck::shuffled(rng);
    let quality = ShuffleQuality::analyze(deck.cards());
    let cards = deck.cards()[..count].to_vec();

    Ok(DealtHand { cards, quality })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert_eq!(card.rank_bits(), card.rank() as u8);
            assert_eq!(card.suit_bits(), card.suit() as u8);
            assert_eq!(card.rank_bit(), 1 << (card.rank() as u16));
            assert_eq!(card.suit_bit(), 1 << (card.suit() as u8));
            assert!(card.id() < Deck::SIZE as u8);
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);

        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.id(), 24);

        let c2 = Card::new(Rank::Deuce, Suit::Clubs);
        assert_eq!(c2.id(), 0);

        let sa = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(sa.id(), 51);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(format!("{c:?}"), "Card(AH)");
    }

    #[test]
    fn parse_all_tokens() {
        for card in Deck::default() {
            let token = card.to_string();
            let parsed = token.parse::<Card>().unwrap();
            assert_eq!(parsed, card);
            assert_eq!(parsed.to_string(), token);
        }

        let c = "QH".parse::<Card>().unwrap();
        assert_eq!(c.rank(), Rank::Queen);
        assert_eq!(c.suit(), Suit::Hearts);
    }

    #[test]
    fn parse_invalid_tokens() {
        for token in ["", "A", "ASX", "XS", "AX", "as", "10", "1S", "A♠", " AS"] {
            assert_eq!(
                token.parse::<Card>(),
                Err(CardError::InvalidCardFormat(token.to_string())),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn card_serde() {
        let c = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"AS\"");

        let cards: Vec<Card> = serde_json::from_str(r#"["TD", "2C"]"#).unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ten, Suit::Diamonds),
                Card::new(Rank::Deuce, Suit::Clubs)
            ]
        );

        assert!(serde_json::from_str::<Card>("\"ZZ\"").is_err());
    }

    #[test]
    fn ordered_deck() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.cards();
        assert_eq!(cards[0], Card::new(Rank::Deuce, Suit::Clubs));
        assert_eq!(cards[12], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(cards[13], Card::new(Rank::Deuce, Suit::Diamonds));
        assert_eq!(cards[51], Card::new(Rank::Ace, Suit::Spades));

        for (idx, card) in cards.iter().enumerate() {
            assert_eq!(card.id() as usize, idx);
        }
    }

    #[test]
    fn shuffle_keeps_all_cards() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let deck = Deck::shuffled(&mut rng);
            let mut ids = deck.cards().iter().map(Card::id).collect::<Vec<_>>();
            ids.sort_unstable();
            assert_eq!(ids, (0..Deck::SIZE as u8).collect::<Vec<_>>());
        }
    }

    #[test]
    fn shuffle_is_seeded() {
        let d1 = Deck::shuffled(&mut StdRng::seed_from_u64(42));
        let d2 = Deck::shuffled(&mut StdRng::seed_from_u64(42));
        assert_eq!(d1.cards(), d2.cards());
        assert_ne!(d1.cards(), Deck::default().cards());
    }

    #[test]
    fn shuffle_positions_spread() {
        // Expected 100 hits for each card at each checked position.
        const ROUNDS: usize = 5_200;

        let mut rng = StdRng::seed_from_u64(1234);
        let mut first = [0usize; Deck::SIZE];
        let mut last = [0usize; Deck::SIZE];

        for _ in 0..ROUNDS {
            let deck = Deck::shuffled(&mut rng);
            first[deck.cards()[0].id() as usize] += 1;
            last[deck.cards()[Deck::SIZE - 1].id() as usize] += 1;
        }

        // A card must be able to stay in its own position, the ace of spades
        // starts at the bottom of the ordered deck.
        assert!(last[51] > 0);

        for hits in first.iter().chain(last.iter()) {
            assert!((40..=180).contains(hits), "hits {hits}");
        }
    }

    #[test]
    fn deck_deal() {
        let mut deck = Deck::default();
        assert_eq!(deck.deal(), Some(Card::new(Rank::Deuce, Suit::Clubs)));
        assert_eq!(deck.deal(), Some(Card::new(Rank::Trey, Suit::Clubs)));
        assert_eq!(deck.count(), Deck::SIZE - 2);

        while deck.deal().is_some() {}
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn deal_hand_sizes() {
        let mut rng = StdRng::seed_from_u64(3);

        for count in [1, 5, 10, 52] {
            let dealt = deal_hand(&mut rng, count).unwrap();
            assert_eq!(dealt.cards.len(), count);

            let unique = dealt.cards.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), count);
        }

        assert_eq!(
            deal_hand(&mut rng, 0).unwrap_err(),
            CardError::InvalidHandSize(0)
        );
        assert_eq!(
            deal_hand(&mut rng, 53).unwrap_err(),
            CardError::InvalidHandSize(53)
        );
    }

    #[test]
    fn deal_hand_is_top_of_deck() {
        let dealt = deal_hand(&mut StdRng::seed_from_u64(11), 5).unwrap();
        let deck = Deck::shuffled(&mut StdRng::seed_from_u64(11));
        assert_eq!(dealt.cards, deck.cards()[..5]);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(52, |_| count += 1);
        assert_eq!(count, 1);

        deck.for_each(0, |_| panic!("no empty hands"));
        deck.for_each(53, |_| panic!("no hands larger than the deck"));
    }
}
