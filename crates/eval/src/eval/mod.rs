// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! This evaluator is a port of the [Cactus Kev's][kevlink] poker evaluator to
//! evaluate 5, 6, and 7 cards poker hands. A 5 cards hand is evaluated with a
//! single table lookup, 6 and 7 cards hands by looking up all their 5 cards
//! subsets and taking the best score.
//!
//! It provides a [Evaluator::evaluate] method that computes the score of the
//! best 5 cards out of the player and board cards, useful for ranking players
//! at showdown, and a [Evaluator::best_hand] that also returns the five best
//! cards, useful for UIs to show a winning hand.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html

mod evaluator;
pub use evaluator::{Evaluator, evaluate};

mod score;
pub use score::{HandClass, Score};
