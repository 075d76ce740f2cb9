// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand scores and classes.
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive};

use crate::EvalError;

/// The highest score in each class, in class order.
const CLASS_MAX_SCORES: [u16; 9] = [10, 166, 322, 1599, 1609, 2467, 3325, 6185, 7462];

const CLASSES: [HandClass; 9] = [
    HandClass::StraightFlush,
    HandClass::FourOfAKind,
    HandClass::FullHouse,
    HandClass::Flush,
    HandClass::Straight,
    HandClass::ThreeOfAKind,
    HandClass::TwoPair,
    HandClass::Pair,
    HandClass::HighCard,
];

/// The strength of a 5 cards hand.
///
/// There are 7462 distinct 5 cards hands, the score of the best one (a royal
/// flush) is 1 and the score of the worst one (7-5-4-3-2 unsuited) is 7462, so
/// a lower score is a stronger hand. Hands with the same ranks have the same
/// score unless one of them is a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Score(u16);

impl Score {
    /// The royal flush score.
    pub const BEST: Score = Score(1);

    /// The 7-5-4-3-2 score.
    pub const WORST: Score = Score(7462);

    /// Creates a score from a table entry.
    pub(crate) const fn from_table(value: u16) -> Score {
        Score(value)
    }

    /// The score value in 1..=7462.
    pub fn value(&self) -> u16 {
        self.0
    }

    /// The class of the hand with this score.
    pub fn class(&self) -> HandClass {
        let idx = CLASS_MAX_SCORES.partition_point(|&max| max < self.0);
        CLASSES[idx]
    }

    /// Checks if this score wins against another score.
    pub fn beats(&self, other: &Score) -> bool {
        self.0 < other.0
    }

    /// The relative strength of this score, 1.0 for the best hand and 0.0 for
    /// the worst one.
    pub fn percentage(&self) -> f64 {
        let worst = Score::WORST.0 - Score::BEST.0;
        1.0 - f64::from(self.0 - Score::BEST.0) / f64::from(worst)
    }
}

impl TryFrom<u16> for Score {
    type Error = EvalError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if (Score::BEST.0..=Score::WORST.0).contains(&value) {
            Ok(Score(value))
        } else {
            Err(EvalError::InvalidScore(value))
        }
    }
}

impl From<Score> for u16 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A poker hand class.
///
/// Classes are ordered like scores, a [HandClass::StraightFlush] is less than
/// a [HandClass::FourOfAKind].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandClass {
    /// Five cards in sequence of the same suit.
    StraightFlush = 1,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Three cards of a rank and two of another.
    FullHouse,
    /// Five cards of the same suit.
    Flush,
    /// Five cards in sequence.
    Straight,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Two pairs of different ranks.
    TwoPair,
    /// Two cards of the same rank.
    Pair,
    /// None of the above.
    HighCard,
}

impl HandClass {
    /// Returns all classes from the strongest to the weakest.
    pub fn classes() -> impl DoubleEndedIterator<Item = HandClass> + ExactSizeIterator {
        CLASSES.into_iter()
    }

    /// The class id in 1..=9.
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// The class name.
    pub fn name(&self) -> &'static str {
        match self {
            HandClass::StraightFlush => "Straight Flush",
            HandClass::FourOfAKind => "Four of a Kind",
            HandClass::FullHouse => "Full House",
            HandClass::Flush => "Flush",
            HandClass::Straight => "Straight",
            HandClass::ThreeOfAKind => "Three of a Kind",
            HandClass::TwoPair => "Two Pair",
            HandClass::Pair => "Pair",
            HandClass::HighCard => "High Card",
        }
    }

    /// The range of scores for this class.
    pub fn score_range(&self) -> RangeInclusive<u16> {
        let idx = self.id() as usize - 1;
        let first = match idx {
            0 => Score::BEST.0,
            _ => CLASS_MAX_SCORES[idx - 1] + 1,
        };

        first..=CLASS_MAX_SCORES[idx]
    }
}

impl TryFrom<u8> for HandClass {
    type Error = EvalError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1..=9 => Ok(CLASSES[id as usize - 1]),
            _ => Err(EvalError::InvalidClass(id)),
        }
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
