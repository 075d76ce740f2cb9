// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand lookup tables.
//!
//! The tables map each of the 7462 distinct 5 cards hands to its score:
//!
//! - the flush table maps the 13 bits rank mask of a flush to the score of a
//!   straight flush or of a flush,
//! - the no pair table maps the rank mask of 5 distinct ranks to the score of
//!   a straight or of a high card hand,
//! - the multi rank table maps the product of the 5 rank primes to the score
//!   of any hand with repeated ranks, the product is unique for each multiset
//!   of ranks.
//!
//! Scores are assigned by enumerating each class from the strongest to the
//! weakest hand.
use ahash::AHashMap;
use log::debug;
use std::{sync::LazyLock, time::Instant};

use crate::{HandClass, Rank};

/// Number of 13 bits rank masks.
const NUM_MASKS: usize = 1 << 13;

/// Straights rank masks from the ace high straight down to the wheel.
const STRAIGHTS: [u16; 10] = [
    0x1f00, // A-K-Q-J-T
    0x0f80, // K-Q-J-T-9
    0x07c0, // Q-J-T-9-8
    0x03e0, // J-T-9-8-7
    0x01f0, // T-9-8-7-6
    0x00f8, // 9-8-7-6-5
    0x007c, // 8-7-6-5-4
    0x003e, // 7-6-5-4-3
    0x001f, // 6-5-4-3-2
    0x100f, // 5-4-3-2-A
];

static TABLES: LazyLock<LookupTables> = LazyLock::new(LookupTables::build);

/// The hand lookup tables.
#[derive(Debug)]
pub struct LookupTables {
    flush: Box<[u16]>,
    no_pair: Box<[u16]>,
    multi_rank: AHashMap<u32, u16>,
}

impl LookupTables {
    /// Returns the process wide tables, the first call builds the tables.
    pub fn get() -> &'static LookupTables {
        &TABLES
    }

    /// Builds the tables.
    pub fn build() -> LookupTables {
        let now = Instant::now();

        let mut flush = vec![0u16; NUM_MASKS].into_boxed_slice();
        let mut no_pair = vec![0u16; NUM_MASKS].into_boxed_slice();

        let straight_flush = first_score(HandClass::StraightFlush);
        let straight = first_score(HandClass::Straight);
        for (score, mask) in (0..).zip(STRAIGHTS) {
            flush[mask as usize] = straight_flush + score;
            no_pair[mask as usize] = straight + score;
        }

        // In descending order the highest rank bit that differs between two
        // masks decides which hand wins, that is the ranking for flushes and
        // high cards.
        let masks = (0..NUM_MASKS as u16)
            .rev()
            .filter(|m| m.count_ones() == 5 && !STRAIGHTS.contains(m));

        let first_flush = first_score(HandClass::Flush);
        let high_card = first_score(HandClass::HighCard);
        for (score, mask) in (0..).zip(masks) {
            flush[mask as usize] = first_flush + score;
            no_pair[mask as usize] = high_card + score;
        }

        let ranks = Rank::ranks().rev().collect::<Vec<_>>();
        let mut multi_rank = AHashMap::default();
        for (class, products) in [
            (HandClass::FourOfAKind, four_of_a_kind(&ranks)),
            (HandClass::FullHouse, full_house(&ranks)),
            (HandClass::ThreeOfAKind, three_of_a_kind(&ranks)),
            (HandClass::TwoPair, two_pair(&ranks)),
            (HandClass::Pair, one_pair(&ranks)),
        ] {
            debug_assert_eq!(products.len(), class.score_range().len());

            let first = first_score(class);
            for (score, product) in (0..).zip(products) {
                multi_rank.insert(product, first + score);
            }
        }

        let tables = LookupTables {
            flush,
            no_pair,
            multi_rank,
        };

        debug!(
            "Built lookup tables in {:?}: {} flush, {} no pair, {} multi rank entries",
            now.elapsed(),
            tables.flush.iter().filter(|&&s| s != 0).count(),
            tables.no_pair.iter().filter(|&&s| s != 0).count(),
            tables.multi_rank.len(),
        );

        tables
    }

    /// Score of a flush given its rank mask.
    #[inline]
    pub fn flush(&self, rank_mask: u32) -> Option<u16> {
        entry(&self.flush, rank_mask)
    }

    /// Score of a hand with 5 distinct ranks given its rank mask.
    #[inline]
    pub fn no_pair(&self, rank_mask: u32) -> Option<u16> {
        entry(&self.no_pair, rank_mask)
    }

    /// Score of a hand with repeated ranks given the product of its primes.
    #[inline]
    pub fn multi_rank(&self, prime_product: u32) -> Option<u16> {
        self.multi_rank.get(&prime_product).copied()
    }

    /// Iterates all the scores in the tables.
    pub fn scores(&self) -> impl Iterator<Item = u16> + '_ {
        self.flush
            .iter()
            .chain(self.no_pair.iter())
            .copied()
            .filter(|&s| s != 0)
            .chain(self.multi_rank.values().copied())
    }
}

#[inline]
fn entry(table: &[u16], rank_mask: u32) -> Option<u16> {
    table
        .get(rank_mask as usize)
        .copied()
        .filter(|&score| score != 0)
}

fn first_score(class: HandClass) -> u16 {
    *class.score_range().start()
}

fn product(ranks: &[Rank]) -> u32 {
    ranks.iter().map(Rank::prime).product()
}

/// Returns all the k-combinations of ranks in lexicographic order.
fn combinations(ranks: &[Rank], k: usize) -> Vec<Vec<Rank>> {
    if k == 0 {
        return vec![vec![]];
    }

    let mut out = Vec::new();
    for (idx, &rank) in ranks.iter().enumerate() {
        for mut rest in combinations(&ranks[idx + 1..], k - 1) {
            rest.insert(0, rank);
            out.push(rest);
        }
    }

    out
}

fn others(ranks: &[Rank], exclude: &[Rank]) -> Vec<Rank> {
    ranks
        .iter()
        .copied()
        .filter(|r| !exclude.contains(r))
        .collect()
}

// The functions below take ranks from ace down to deuce and return products
// from the strongest to the weakest hand.

fn four_of_a_kind(ranks: &[Rank]) -> Vec<u32> {
    let mut products = Vec::new();
    for &quad in ranks {
        for kicker in others(ranks, &[quad]) {
            products.push(product(&[quad, quad, quad, quad, kicker]));
        }
    }

    products
}

fn full_house(ranks: &[Rank]) -> Vec<u32> {
    let mut products = Vec::new();
    for &trips in ranks {
        for pair in others(ranks, &[trips]) {
            products.push(product(&[trips, trips, trips, pair, pair]));
        }
    }

    products
}

fn three_of_a_kind(ranks: &[Rank]) -> Vec<u32> {
    let mut products = Vec::new();
    for &trips in ranks {
        for kickers in combinations(&others(ranks, &[trips]), 2) {
            products.push(product(&[trips, trips, trips, kickers[0], kickers[1]]));
        }
    }

    products
}

fn two_pair(ranks: &[Rank]) -> Vec<u32> {
    let mut products = Vec::new();
    for pairs in combinations(ranks, 2) {
        let (high, low) = (pairs[0], pairs[1]);
        for kicker in others(ranks, &pairs) {
            products.push(product(&[high, high, low, low, kicker]));
        }
    }

    products
}

fn one_pair(ranks: &[Rank]) -> Vec<u32> {
    let mut products = Vec::new();
    for &pair in ranks {
        for kickers in combinations(&others(ranks, &[pair]), 3) {
            products.push(product(&[pair, pair, kickers[0], kickers[1], kickers[2]]));
        }
    }

    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use Rank::*;

    fn mask(ranks: &[Rank]) -> u32 {
        ranks.iter().fold(0, |m, r| m | r.bit())
    }

    #[test]
    fn tables_size() {
        let tables = LookupTables::build();

        assert_eq!(tables.flush.iter().filter(|&&s| s != 0).count(), 1287);
        assert_eq!(tables.no_pair.iter().filter(|&&s| s != 0).count(), 1287);
        assert_eq!(tables.multi_rank.len(), 4888);

        // Each score is assigned to exactly one hand.
        let scores = tables.scores().collect::<Vec<_>>();
        assert_eq!(scores.len(), 7462);

        let distinct = scores.iter().copied().collect::<HashSet<_>>();
        assert_eq!(distinct.len(), 7462);
        assert_eq!(distinct.iter().min(), Some(&1));
        assert_eq!(distinct.iter().max(), Some(&7462));
    }

    #[test]
    fn tables_build_deterministic() {
        let t1 = LookupTables::build();
        let t2 = LookupTables::get();
        assert_eq!(t1.flush, t2.flush);
        assert_eq!(t1.no_pair, t2.no_pair);
        assert_eq!(t1.multi_rank, t2.multi_rank);
    }

    #[test]
    fn straights_order() {
        let tables = LookupTables::get();

        let straights = [
            [Ace, King, Queen, Jack, Ten],
            [King, Queen, Jack, Ten, Nine],
            [Queen, Jack, Ten, Nine, Eight],
            [Jack, Ten, Nine, Eight, Seven],
            [Ten, Nine, Eight, Seven, Six],
            [Nine, Eight, Seven, Six, Five],
            [Eight, Seven, Six, Five, Four],
            [Seven, Six, Five, Four, Trey],
            [Six, Five, Four, Trey, Deuce],
            [Five, Four, Trey, Deuce, Ace],
        ];

        for (idx, ranks) in straights.iter().enumerate() {
            let m = mask(ranks);
            assert_eq!(m, STRAIGHTS[idx] as u32);
            assert_eq!(tables.flush(m), Some(1 + idx as u16));
            assert_eq!(tables.no_pair(m), Some(1600 + idx as u16));
        }

        // The wheel is the weakest straight in both classes.
        let wheel = mask(&[Ace, Deuce, Trey, Four, Five]);
        assert_eq!(tables.flush(wheel), Some(10));
        assert_eq!(tables.no_pair(wheel), Some(1609));

        // No wrap around.
        let wrap = mask(&[Queen, King, Ace, Deuce, Trey]);
        assert!(tables.no_pair(wrap).unwrap() >= 6186);
    }

    #[test]
    fn flush_and_high_card_order() {
        let tables = LookupTables::get();

        let best = mask(&[Ace, King, Queen, Jack, Nine]);
        assert_eq!(tables.flush(best), Some(323));
        assert_eq!(tables.no_pair(best), Some(6186));

        let worst = mask(&[Seven, Five, Four, Trey, Deuce]);
        assert_eq!(tables.flush(worst), Some(1599));
        assert_eq!(tables.no_pair(worst), Some(7462));

        let h1 = mask(&[Seven, Five, Four, Trey, Deuce]);
        let h2 = mask(&[Seven, Six, Four, Trey, Deuce]);
        assert!(tables.no_pair(h2) < tables.no_pair(h1));

        // Not 5 distinct ranks.
        assert_eq!(tables.flush(mask(&[Ace, King, Queen, Jack])), None);
        assert_eq!(tables.no_pair(0), None);
        assert_eq!(tables.no_pair(1 << 13), None);
    }

    #[test]
    fn multi_rank_order() {
        let tables = LookupTables::get();
        let score = |ranks: [Rank; 5]| tables.multi_rank(product(&ranks)).unwrap();

        assert_eq!(score([Ace, Ace, Ace, Ace, King]), 11);
        assert_eq!(score([Ace, Ace, Ace, Ace, Queen]), 12);
        assert_eq!(score([Deuce, Deuce, Deuce, Deuce, Trey]), 166);
        assert_eq!(score([Ace, Ace, Ace, King, King]), 167);
        assert_eq!(score([Deuce, Deuce, Deuce, Trey, Trey]), 322);
        assert_eq!(score([Ace, Ace, Ace, King, Queen]), 1610);
        assert_eq!(score([Deuce, Deuce, Deuce, Four, Trey]), 2467);
        assert_eq!(score([Ace, Ace, King, King, Queen]), 2468);
        assert_eq!(score([Trey, Trey, Deuce, Deuce, Four]), 3325);
        assert_eq!(score([Ace, Ace, King, Queen, Jack]), 3326);
        assert_eq!(score([Deuce, Deuce, Five, Four, Trey]), 6185);

        // Kickers break ties.
        assert!(score([Ace, Ace, King, Eight, Deuce]) < score([Ace, Ace, Queen, Eight, Deuce]));
        assert!(score([King, King, Deuce, Deuce, Ace]) < score([King, King, Deuce, Deuce, Queen]));
        assert!(score([Nine, Nine, Nine, Nine, Deuce]) < score([Ace, Ace, Ace, King, King]));

        // Five of a kind and 5 distinct ranks are not in the table.
        assert_eq!(tables.multi_rank(product(&[Ace; 5])), None);
        assert_eq!(tables.multi_rank(product(&[Ace, King, Queen, Jack, Ten])), None);
    }

    #[test]
    fn combinations_order() {
        let c = combinations(&[Ace, King, Queen, Jack], 2);
        assert_eq!(
            c,
            [
                vec![Ace, King],
                vec![Ace, Queen],
                vec![Ace, Jack],
                vec![King, Queen],
                vec![King, Jack],
                vec![Queen, Jack],
            ]
        );

        assert_eq!(combinations(&[Ace, King], 3).len(), 0);
        assert_eq!(combinations(&Rank::ranks().collect::<Vec<_>>(), 5).len(), 1287);
    }
}
