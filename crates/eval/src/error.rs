// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use thiserror::Error;

use pokerbot_cards::Card;

/// Errors returned by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand doesn't have 5, 6, or 7 cards.
    #[error("invalid hand size {0}, a hand must have 5, 6, or 7 cards")]
    InvalidHandSize(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A score outside 1..=7462.
    #[error("invalid score {0}, a score must be between 1 and 7462")]
    InvalidScore(u16),
    /// A hand class id outside 1..=9.
    #[error("invalid hand class {0}, a class id must be between 1 and 9")]
    InvalidClass(u8),
}
