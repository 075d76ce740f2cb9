// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! CLI commands.
use anyhow::{Context, Result, bail};
use log::info;
use std::time::Instant;

use pokerbot_eval::{Card, Deck, Evaluator, HandClass, Showdown};

/// Parses cards separated by spaces or commas.
fn parse_cards(s: &str) -> Result<Vec<Card>> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<Card>()
                .with_context(|| format!("Cannot parse cards '{s}'"))
        })
        .collect()
}

fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prints the score and class of a hand.
pub fn eval(hole: &str, board: &str) -> Result<()> {
    let hole = parse_cards(hole)?;
    let board = parse_cards(board)?;

    let eval = Evaluator::new();
    let score = eval.evaluate(&hole, &board)?;

    let cards = hole.iter().chain(&board).copied().collect::<Vec<_>>();
    let (_, best) = eval.best_hand(&cards)?;

    println!("Score:    {score}");
    println!("Class:    {}", eval.class_to_string(eval.get_rank_class(score)));
    println!("Best:     {}", cards_to_string(&best));
    println!("Strength: {:.2}%", eval.rank_percentage(score) * 100.0);

    Ok(())
}

/// Prints each hand score and the winners.
pub fn compare(board: &str, hands: &[String]) -> Result<()> {
    let board = parse_cards(board)?;
    let hands = hands
        .iter()
        .map(|h| parse_cards(h))
        .collect::<Result<Vec<_>>>()?;

    if hands.len() < 2 {
        bail!("At least two hands are needed for a showdown");
    }

    let eval = Evaluator::new();
    let showdown = Showdown::new(&eval, &board, &hands)?;

    for (idx, (hand, score)) in hands.iter().zip(showdown.scores()).enumerate() {
        println!(
            "Hand {}: {:<8} score {:>4}  {}",
            idx + 1,
            cards_to_string(hand),
            score,
            score.class()
        );
    }

    let winners = showdown
        .winners()
        .into_iter()
        .map(|idx| (idx + 1).to_string())
        .collect::<Vec<_>>();

    if showdown.is_split() {
        println!("Split pot between hands {}", winners.join(", "));
    } else {
        println!("Hand {} wins", winners.join(""));
    }

    Ok(())
}

/// Evaluates all the hands with the given number of cards.
pub fn stats(cards: usize) -> Result<()> {
    info!("Evaluating all {cards} cards hands");

    let eval = Evaluator::new();
    let now = Instant::now();
    let mut counts = [0usize; 9];
    let mut result = Ok(());

    Deck::default().for_each(cards, |hand| match eval.evaluate_cards(hand) {
        Ok(score) => counts[score.class().id() as usize - 1] += 1,
        Err(e) => result = Err(e),
    });
    result?;

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for (class, count) in HandClass::classes().zip(counts) {
        println!("{:<17}{count}", format!("{class}:"));
    }

    Ok(())
}
