// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerbot cards types.
//!
//! This crate define types to create cards from ranks and suits or from their
//! names:
//!
//! ```
//! # use pokerbot_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let ts = Card::from_tokens("10", "spades").unwrap();
//! let kd = "Kd".parse::<Card>().unwrap();
//! assert!(ah > kd && kd > ts);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use pokerbot_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
mod deck;
mod error;

pub use cards::{Card, CardRecord, Rank, Suit};
pub use deck::Deck;
pub use error::CardError;
