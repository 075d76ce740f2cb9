// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::CardError;

/// Primes used to encode a card rank.
const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// A Poker card.
///
/// A card is represented using the encoding in the [Cactus Kev's][kevlink] Poker
/// hand evaluator with each card having the following format:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxpppppp|
///   +--------+--------+--------+--------+
///   p = prime number of rank (deuce=2,trey=3,four=5,five=7,...,ace=41)
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card
///   b = bit turned on depending on rank of card
/// ```
///
/// Equality, ordering, and hashing only look at the card rank, so that the
/// ace of hearts and the ace of spades compare equal. Use [Card::is_same] or
/// [Card::encode] to tell two physical cards apart.
///
/// A card serializes as a `{"rank": 14, "suit": "hearts"}` record.
///
/// [kevlink]: http://suffe.cool/poker/evaluator.html
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "CardRecord", into = "CardRecord")]
pub struct Card(u32);

impl Card {
    /// Create a card given a suit and rank.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        let (rank, suit) = (rank as u32, suit as u32);
        Self(PRIMES[rank as usize] | (rank << 8) | (suit << 12) | (1 << (rank + 16)))
    }

    /// Create a card from a rank and a suit token.
    ///
    /// The rank can be a number (`"10"`), a name (`"queen"`), or a shorthand
    /// (`"q"`), the suit a name (`"hearts"`), a letter (`"h"`), or a symbol.
    pub fn from_tokens(rank: &str, suit: &str) -> Result<Card, CardError> {
        Ok(Card::new(rank.parse()?, suit.parse()?))
    }

    /// The packed card encoding, unique for each rank and suit pair.
    #[inline]
    pub fn encode(&self) -> u32 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bit() {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => panic!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::from_index(self.rank_index() as usize)
    }

    /// The rank prime field.
    #[inline]
    pub fn prime(&self) -> u32 {
        self.0 & 0xff
    }

    /// The one-hot 13 bits rank field.
    #[inline]
    pub fn rank_bit(&self) -> u32 {
        self.0 >> 16
    }

    /// The one-hot 4 bits suit field.
    #[inline]
    pub fn suit_bit(&self) -> u32 {
        (self.0 >> 12) & 0xf
    }

    #[inline]
    fn rank_index(&self) -> u32 {
        (self.0 >> 8) & 0xf
    }

    /// Checks if this is the same physical card, rank and suit.
    #[inline]
    pub fn is_same(&self, other: &Card) -> bool {
        self.0 == other.0
    }

    /// Converts this card to a plain rank and suit record.
    pub fn to_record(&self) -> CardRecord {
        CardRecord {
            rank: self.rank().value(),
            suit: self.suit().name().to_string(),
        }
    }

    /// Creates a card from a plain record.
    pub fn from_record(record: &CardRecord) -> Result<Card, CardError> {
        let rank = Rank::try_from(record.rank)?;
        let suit = record.suit.parse()?;
        Ok(Card::new(rank, suit))
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank_index() == other.rank_index()
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank_index().cmp(&other.rank_index())
    }
}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank_index().hash(state);
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card like `"AH"`, `"10h"`, `"Td"`, or `"Q♠"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .ok_or_else(|| CardError::InvalidCard(s.to_string()))?;
        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(CardError::InvalidCard(s.to_string()));
        }

        let mut buf = [0; 4];
        Card::from_tokens(rank, suit.encode_utf8(&mut buf))
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

/// A card as a plain rank and suit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// The rank value in 2..=14.
    pub rank: u8,
    /// The suit name.
    pub suit: String,
}

impl TryFrom<CardRecord> for Card {
    type Error = CardError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        Card::from_record(&record)
    }
}

impl From<Card> for CardRecord {
    fn from(card: Card) -> Self {
        card.to_record()
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

const RANKS: [Rank; 13] = {
    use Rank::*;
    [
        Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
    ]
};

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> + ExactSizeIterator {
        RANKS.into_iter()
    }

    fn from_index(idx: usize) -> Rank {
        match RANKS.get(idx) {
            Some(rank) => *rank,
            None => panic!("Invalid rank index {idx}"),
        }
    }

    /// The rank value, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// The prime used to encode this rank.
    pub fn prime(&self) -> u32 {
        PRIMES[*self as usize]
    }

    /// The one-hot bit for this rank.
    pub fn bit(&self) -> u32 {
        1 << (*self as u32)
    }

    /// The rank name, `"2"` to `"10"` for number cards.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Ace => "ace",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2..=14 => Ok(RANKS[(value - 2) as usize]),
            _ => Err(CardError::InvalidRank(value.to_string())),
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        let rank = match token.as_str() {
            "deuce" | "two" => Rank::Deuce,
            "trey" | "three" => Rank::Trey,
            "four" => Rank::Four,
            "five" => Rank::Five,
            "six" => Rank::Six,
            "seven" => Rank::Seven,
            "eight" => Rank::Eight,
            "nine" => Rank::Nine,
            "t" | "ten" => Rank::Ten,
            "j" | "jack" => Rank::Jack,
            "q" | "queen" => Rank::Queen,
            "k" | "king" => Rank::King,
            "a" | "ace" => Rank::Ace,
            num => {
                let value = num
                    .parse::<u8>()
                    .map_err(|_| CardError::InvalidRank(s.to_string()))?;
                Rank::try_from(value)?
            }
        };

        Ok(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
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
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// The discriminant is the one-hot suit field of the card encoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> + ExactSizeIterator {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit name.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }

    /// The suit unicode symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "club" | "clubs" | "♣" => Ok(Suit::Clubs),
            "d" | "diamond" | "diamonds" | "♦" => Ok(Suit::Diamonds),
            "h" | "heart" | "hearts" | "♥" => Ok(Suit::Hearts),
            "s" | "spade" | "spades" | "♠" => Ok(Suit::Spades),
            _ => Err(CardError::InvalidSuit(s.to_string())),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}
