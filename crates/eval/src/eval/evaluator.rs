// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluator.
use crate::{Card, EvalError, HandClass, LookupTables, Rank, Score, Suit};

/// The maximum number of cards in a hand.
const MAX_CARDS: usize = 7;

/// Builds the k-subsets of 5 elements out of N in lexicographic order.
const fn five_subsets<const N: usize, const M: usize>() -> [[usize; 5]; M] {
    let mut out = [[0usize; 5]; M];
    let mut idx = [0, 1, 2, 3, 4];
    let mut n = 0;

    loop {
        out[n] = idx;
        n += 1;
        if n == M {
            break;
        }

        // Find the rightmost position that can move forward.
        let mut i = 4;
        while idx[i] == N - 5 + i {
            i -= 1;
        }

        idx[i] += 1;
        let mut j = i + 1;
        while j < 5 {
            idx[j] = idx[j - 1] + 1;
            j += 1;
        }
    }

    out
}

const SUBSETS_5: [[usize; 5]; 1] = five_subsets::<5, 1>();
const SUBSETS_6: [[usize; 5]; 6] = five_subsets::<6, 6>();
const SUBSETS_7: [[usize; 5]; 21] = five_subsets::<7, 21>();

/// A poker hand evaluator.
///
/// The evaluator is a cheap handle to the process wide lookup tables and can
/// be copied and shared across threads.
///
/// ```
/// # use pokerbot_eval::*;
/// let eval = Evaluator::new();
/// let hole = ["Ah", "Kh"].map(|c| c.parse::<Card>().unwrap());
/// let board = ["Qh", "Jh", "Th", "2c", "3d"].map(|c| c.parse::<Card>().unwrap());
///
/// let score = eval.evaluate(&hole, &board).unwrap();
/// assert_eq!(score, Score::BEST);
/// assert_eq!(eval.class_to_string(eval.get_rank_class(score)), "Straight Flush");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    tables: &'static LookupTables,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator, building the lookup tables if needed.
    pub fn new() -> Self {
        Self {
            tables: LookupTables::get(),
        }
    }

    /// Evaluates a player hole cards with the board cards.
    ///
    /// The combined cards must be 5, 6, or 7 distinct cards.
    pub fn evaluate(&self, hole: &[Card], board: &[Card]) -> Result<Score, EvalError> {
        let size = hole.len() + board.len();
        if !(5..=MAX_CARDS).contains(&size) {
            return Err(EvalError::InvalidHandSize(size));
        }

        let mut cards = [Card::new(Rank::Ace, Suit::Spades); MAX_CARDS];
        cards[..hole.len()].copy_from_slice(hole);
        cards[hole.len()..size].copy_from_slice(board);

        self.evaluate_cards(&cards[..size])
    }

    /// Evaluates a hand of 5, 6, or 7 distinct cards.
    ///
    /// For 6 and 7 cards the score is the best score of all the 5 cards
    /// subsets.
    pub fn evaluate_cards(&self, cards: &[Card]) -> Result<Score, EvalError> {
        check_hand(cards)?;
        Ok(self.best_subset(cards).0)
    }

    /// Evaluates a hand of 5, 6, or 7 distinct cards and returns the score
    /// with the 5 cards that make it.
    pub fn best_hand(&self, cards: &[Card]) -> Result<(Score, [Card; 5]), EvalError> {
        check_hand(cards)?;
        let (score, idx) = self.best_subset(cards);
        Ok((score, idx.map(|i| cards[i])))
    }

    /// The class of a score.
    pub fn get_rank_class(&self, score: Score) -> HandClass {
        score.class()
    }

    /// The name of a class.
    pub fn class_to_string(&self, class: HandClass) -> &'static str {
        class.name()
    }

    /// The relative strength of a score, 1.0 for a royal flush.
    pub fn rank_percentage(&self, score: Score) -> f64 {
        score.percentage()
    }

    fn best_subset(&self, cards: &[Card]) -> (Score, [usize; 5]) {
        let subsets: &[[usize; 5]] = match cards.len() {
            5 => &SUBSETS_5,
            6 => &SUBSETS_6,
            _ => &SUBSETS_7,
        };

        let mut best_idx = subsets[0];
        let mut best = self.eval5(best_idx.map(|i| cards[i]));

        for &idx in &subsets[1..] {
            let score = self.eval5(idx.map(|i| cards[i]));
            if score < best {
                best = score;
                best_idx = idx;
            }
        }

        (best, best_idx)
    }

    /// Evaluates 5 distinct cards.
    #[inline]
    fn eval5(&self, cards: [Card; 5]) -> Score {
        let [c1, c2, c3, c4, c5] = cards.map(|c| c.encode());
        let rank_mask = (c1 | c2 | c3 | c4 | c5) >> 16;

        let score = if c1 & c2 & c3 & c4 & c5 & 0xf000 != 0 {
            self.tables.flush(rank_mask)
        } else if rank_mask.count_ones() == 5 {
            self.tables.no_pair(rank_mask)
        } else {
            let product = cards.iter().map(Card::prime).product();
            self.tables.multi_rank(product)
        };

        match score {
            Some(score) => Score::from_table(score),
            None => panic!("No table entry for hand {cards:?}"),
        }
    }
}

/// Evaluates a player hole cards with the board cards using the process wide
/// lookup tables.
pub fn evaluate(hole: &[Card], board: &[Card]) -> Result<Score, EvalError> {
    Evaluator::new().evaluate(hole, board)
}

/// Checks the hand size and that there are no duplicate cards.
fn check_hand(cards: &[Card]) -> Result<(), EvalError> {
    if !(5..=MAX_CARDS).contains(&cards.len()) {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }

    for (pos, card) in cards.iter().enumerate() {
        if cards[pos + 1..].iter().any(|c| c.is_same(card)) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }

    Ok(())
}
