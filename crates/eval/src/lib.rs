// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerbot hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. This evaluator is a port of
//! the [Cactus Kev's][kevlink] poker evaluator, the lookup tables are built on
//! first use and shared by all the evaluators in the process.
//!
//! To use the evaluator create a hand and use [Evaluator] to get its [Score]
//! and [HandClass], a lower score is a stronger hand:
//!
//! ```
//! # use pokerbot_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::with_cards(Rank::ranks(), [Suit::Clubs])
//!     .into_iter()
//!     .take(10)
//!     .collect::<Vec<_>>();
//!
//! let eval = Evaluator::new();
//! let s1 = eval.evaluate_cards(&cards[0..5]).unwrap();
//! let s2 = eval.evaluate_cards(&cards[5..]).unwrap();
//! assert!(s2 < s1);
//! assert_eq!(s2.class(), HandClass::StraightFlush);
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Evaluator, HandClass, Score, evaluate};

mod error;
pub use error::EvalError;

pub mod showdown;
pub use showdown::Showdown;

pub mod tables;
pub use tables::LookupTables;

// Reexport cards types.
pub use pokerbot_cards::{Card, CardError, Deck, Rank, Suit};
