// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown ranking.
use crate::{Card, EvalError, Evaluator, Score};

/// The scores of all the players hands at showdown.
///
/// ```
/// # use pokerbot_eval::*;
/// let cards = |s: &str| {
///     s.split_whitespace()
///         .map(|c| c.parse::<Card>().unwrap())
///         .collect::<Vec<_>>()
/// };
///
/// let board = cards("KH KD QC QS AH");
/// let hands = [cards("3D 3C"), cards("2D 2C"), cards("JD TC")];
/// let showdown = Showdown::new(&Evaluator::new(), &board, &hands).unwrap();
///
/// // The pocket pairs play the board, the straight wins.
/// assert_eq!(showdown.winners(), [2]);
/// ```
#[derive(Debug, Clone)]
pub struct Showdown {
    scores: Vec<Score>,
}

impl Showdown {
    /// Evaluates each player hole cards with the board.
    ///
    /// Fails if a hand is invalid or if a card appears in more than one hand.
    pub fn new<H>(evaluator: &Evaluator, board: &[Card], hands: &[H]) -> Result<Self, EvalError>
    where
        H: AsRef<[Card]>,
    {
        let all_cards = hands
            .iter()
            .flat_map(|h| h.as_ref())
            .chain(board)
            .collect::<Vec<_>>();

        for (pos, card) in all_cards.iter().enumerate() {
            if all_cards[pos + 1..].iter().any(|c| c.is_same(card)) {
                return Err(EvalError::DuplicateCard(**card));
            }
        }

        let scores = hands
            .iter()
            .map(|h| evaluator.evaluate(h.as_ref(), board))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { scores })
    }

    /// The score of each hand in input order.
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    /// The winning score.
    pub fn best(&self) -> Option<Score> {
        self.scores.iter().min().copied()
    }

    /// The indices of all the hands with the winning score.
    pub fn winners(&self) -> Vec<usize> {
        match self.best() {
            Some(best) => self
                .scores
                .iter()
                .enumerate()
                .filter(|(_, s)| **s == best)
                .map(|(idx, _)| idx)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Checks if more than one hand has the winning score.
    pub fn is_split(&self) -> bool {
        self.winners().len() > 1
    }
}
