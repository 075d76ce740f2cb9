// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Property tests for the hand evaluator.
use pokerbot_eval::*;
use proptest::prelude::*;

fn deck_cards() -> Vec<Card> {
    Deck::default().into_iter().collect()
}

// Distinct cards in random order.
fn hand_strategy(size: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(deck_cards(), size).prop_shuffle()
}

// A permutation of the four suits.
fn suits_strategy() -> impl Strategy<Value = Vec<Suit>> {
    Just(Suit::suits().collect::<Vec<_>>()).prop_shuffle()
}

fn relabel(cards: &[Card], suits: &[Suit]) -> Vec<Card> {
    let all = Suit::suits().collect::<Vec<_>>();
    cards
        .iter()
        .map(|c| {
            let idx = all.iter().position(|&s| s == c.suit()).unwrap();
            Card::new(c.rank(), suits[idx])
        })
        .collect()
}

proptest! {
    #[test]
    fn score_in_range(hand in (5usize..=7).prop_flat_map(hand_strategy)) {
        let score = Evaluator::new().evaluate_cards(&hand).unwrap();
        prop_assert!((1..=7462).contains(&score.value()));

        let class = score.class();
        prop_assert!(class.score_range().contains(&score.value()));
        prop_assert!(HandClass::classes().any(|c| c.name() == class.name()));
    }

    #[test]
    fn permutation_invariant(
        (hand, shuffled) in hand_strategy(5)
            .prop_flat_map(|h| (Just(h.clone()), Just(h).prop_shuffle()))
    ) {
        let eval = Evaluator::new();
        prop_assert_eq!(
            eval.evaluate_cards(&hand).unwrap(),
            eval.evaluate_cards(&shuffled).unwrap()
        );
    }

    #[test]
    fn suits_relabel_invariant(hand in hand_strategy(7), suits in suits_strategy()) {
        let eval = Evaluator::new();
        let relabeled = relabel(&hand, &suits);

        prop_assert_eq!(
            eval.evaluate_cards(&hand).unwrap(),
            eval.evaluate_cards(&relabeled).unwrap()
        );
    }

    #[test]
    fn hole_and_board_split(hand in hand_strategy(7), split in 0usize..=7) {
        let eval = Evaluator::new();
        let (hole, board) = hand.split_at(split);

        prop_assert_eq!(
            eval.evaluate(hole, board).unwrap(),
            eval.evaluate_cards(&hand).unwrap()
        );
    }

    #[test]
    fn seven_cards_best_subset(hand in hand_strategy(7)) {
        let eval = Evaluator::new();
        let score = eval.evaluate_cards(&hand).unwrap();

        let mut min = Score::WORST;
        for skip1 in 0..7 {
            for skip2 in (skip1 + 1)..7 {
                let sub = hand
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip1 && *i != skip2)
                    .map(|(_, c)| *c)
                    .collect::<Vec<_>>();
                min = min.min(eval.evaluate_cards(&sub).unwrap());
            }
        }

        prop_assert_eq!(score, min);
    }

    #[test]
    fn evaluation_is_pure(hand in hand_strategy(6), other in hand_strategy(7)) {
        let eval = Evaluator::new();
        let first = eval.evaluate_cards(&hand).unwrap();
        let _ = eval.evaluate_cards(&other).unwrap();
        prop_assert_eq!(first, eval.evaluate_cards(&hand).unwrap());
        prop_assert_eq!(first, evaluate(&hand[..2], &hand[2..]).unwrap());
    }

    #[test]
    fn invalid_sizes_fail(hand in (0usize..=10).prop_flat_map(hand_strategy)) {
        let res = Evaluator::new().evaluate_cards(&hand);
        if (5..=7).contains(&hand.len()) {
            prop_assert!(res.is_ok());
        } else {
            prop_assert_eq!(res, Err(EvalError::InvalidHandSize(hand.len())));
        }
    }
}
