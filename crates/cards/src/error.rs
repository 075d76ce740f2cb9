// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

/// Errors returned when building cards or dealing from a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank is not a number in 2..=14 or a recognized name.
    #[error("invalid rank '{0}': rank should be between 2 and 14")]
    InvalidRank(String),
    /// The suit is not one of clubs, diamonds, hearts, or spades.
    #[error("invalid suit '{0}': suit must be in [clubs, diamonds, hearts, spades]")]
    InvalidSuit(String),
    /// The card string is not a rank followed by a suit.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
    /// No cards left to deal.
    #[error("deck is empty, reset the deck before dealing")]
    EmptyDeck,
}
