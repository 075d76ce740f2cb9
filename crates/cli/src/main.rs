// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerbot hand evaluator CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a player hand.
    Eval {
        /// The player hole cards, for example "Ah Kh".
        #[clap(long, default_value = "")]
        hole: String,
        /// The board cards, for example "Qh Jh Th".
        #[clap(long, short, default_value = "")]
        board: String,
    },
    /// Compares players hands at showdown.
    Compare {
        /// The board cards.
        #[clap(long, short)]
        board: String,
        /// A player hole cards, repeat for each player.
        #[clap(long = "hand", required = true)]
        hands: Vec<String>,
    },
    /// Evaluates all the hands of a given size and prints the count for each
    /// hand class.
    Stats {
        /// Number of cards in a hand.
        #[clap(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(5..=7))]
        cards: u8,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    match cli.command {
        Command::Eval { hole, board } => commands::eval(&hole, &board),
        Command::Compare { board, hands } => commands::compare(&board, &hands),
        Command::Stats { cards } => commands::stats(cards as usize),
    }
}
