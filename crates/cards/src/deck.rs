// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A cards deck.
use rand::prelude::*;

use crate::{Card, CardError, Rank, Suit};

/// A cards Deck
///
/// Cards picked from the deck are tracked as dealt until the deck is reset.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    dealt: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates an unshuffled deck with the given ranks and suits only.
    pub fn with_cards<I, J>(ranks: I, suits: J) -> Self
    where
        I: IntoIterator<Item = Rank>,
        J: IntoIterator<Item = Suit>,
    {
        let ranks = ranks.into_iter().collect::<Vec<_>>();
        let cards = suits
            .into_iter()
            .flat_map(|s| ranks.iter().map(move |&r| Card::new(r, s)))
            .collect::<Vec<_>>();

        Self {
            cards,
            dealt: Vec::new(),
        }
    }

    /// Picks a random card from the deck.
    pub fn pick_random<R: Rng>(&mut self, rng: &mut R) -> Result<Card, CardError> {
        if self.cards.is_empty() {
            return Err(CardError::EmptyDeck);
        }

        let idx = rng.random_range(0..self.cards.len());
        let card = self.cards.swap_remove(idx);
        self.dealt.push(card);
        Ok(card)
    }

    /// Picks the card at the top of the deck.
    pub fn pick_sequential(&mut self) -> Result<Card, CardError> {
        let card = self.cards.pop().ok_or(CardError::EmptyDeck)?;
        self.dealt.push(card);
        Ok(card)
    }

    /// Puts back all the dealt cards and shuffles the deck.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.cards.append(&mut self.dealt);
        self.cards.shuffle(rng);
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards left in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Number of cards dealt since the last reset.
    pub fn dealt_count(&self) -> usize {
        self.dealt.len()
    }

    /// Number of cards left plus dealt cards.
    pub fn total_count(&self) -> usize {
        self.cards.len() + self.dealt.len()
    }

    /// Removes a card from the deck, returns false if the card was not found.
    pub fn remove(&mut self, card: Card) -> bool {
        let len = self.cards.len();
        self.cards.retain(|c| !c.is_same(&card));
        self.cards.len() != len
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let n = self.cards.len();
        let mut h = vec![Card::new(Rank::Ace, Suit::Hearts); 7];

        for c1 in 0..n {
            h[0] = self.cards[c1];

            for c2 in (c1 + 1)..n {
                h[1] = self.cards[c2];

                if k == 2 {
                    f(&h[0..k]);
                    continue;
                }

                for c3 in (c2 + 1)..n {
                    h[2] = self.cards[c3];

                    if k == 3 {
                        f(&h[0..k]);
                        continue;
                    }

                    for c4 in (c3 + 1)..n {
                        h[3] = self.cards[c4];

                        if k == 4 {
                            f(&h[0..k]);
                            continue;
                        }

                        for c5 in (c4 + 1)..n {
                            h[4] = self.cards[c5];

                            if k == 5 {
                                f(&h[0..k]);
                                continue;
                            }

                            for c6 in (c5 + 1)..n {
                                h[5] = self.cards[c6];

                                if k == 6 {
                                    f(&h[0..k]);
                                    continue;
                                }

                                for c7 in (c6 + 1)..n {
                                    h[6] = self.cards[c7];
                                    f(&h[0..k]);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::with_cards(Rank::ranks(), Suit::suits())
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_pick_random() {
        let mut rng = rand::rng();
        let mut deck = Deck::new_and_shuffled(&mut rng);
        assert_eq!(deck.len(), Deck::SIZE);
        assert_eq!(deck.total_count(), Deck::SIZE);

        let mut picked = HashSet::default();
        while !deck.is_empty() {
            let card = deck.pick_random(&mut rng).unwrap();
            assert_eq!(deck.total_count(), Deck::SIZE);
            picked.insert(card.encode());
        }

        assert_eq!(picked.len(), Deck::SIZE);
        assert_eq!(deck.dealt_count(), Deck::SIZE);
        assert_eq!(deck.pick_random(&mut rng), Err(CardError::EmptyDeck));
        assert_eq!(deck.pick_sequential(), Err(CardError::EmptyDeck));
    }

    #[test]
    fn deck_reset() {
        let mut rng = rand::rng();
        let mut deck = Deck::new_and_shuffled(&mut rng);

        for _ in 0..3 {
            deck.pick_sequential().unwrap();
        }

        assert_eq!(deck.len(), 49);
        assert_eq!(deck.dealt_count(), 3);
        assert_eq!(deck.total_count(), Deck::SIZE);

        deck.reset(&mut rng);
        assert_eq!(deck.len(), Deck::SIZE);
        assert_eq!(deck.dealt_count(), 0);
    }

    #[test]
    fn deck_short() {
        let deck = Deck::with_cards(
            [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace],
            Suit::suits(),
        );
        assert_eq!(deck.len(), 20);

        let ids = deck
            .into_iter()
            .map(|c| c.encode())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        assert!(deck.remove(Card::new(Rank::Ace, Suit::Diamonds)));
        assert!(!deck.remove(Card::new(Rank::Ace, Suit::Diamonds)));

        // Only the ace of diamonds is removed, not all aces.
        assert_eq!(deck.len(), Deck::SIZE - 1);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.iter().map(|c| c.encode()).collect::<Vec<_>>());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.iter().map(|c| c.encode()).collect::<Vec<_>>());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    // Goes through 100M hands, slow in debug mode.
    #[test]
    #[ignore]
    fn deck_for_each_7cards_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 99_884_400);
    }
}
