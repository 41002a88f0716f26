//! Multi-deck shoe with automatic rebuild below a threshold.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Suit};

/// A shuffled multi-deck card source.
///
/// Cards are drawn from the end of the internal vector. Whenever fewer than
/// `threshold` cards remain before a draw, the shoe is rebuilt from fresh
/// decks and reshuffled, so a draw never fails.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
    threshold: usize,
    reshuffles: u32,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a freshly built and shuffled shoe.
    #[must_use]
    pub fn new(decks: u8, threshold: usize, seed: u64) -> Self {
        let mut shoe = Self {
            cards: Vec::with_capacity(decks as usize * DECK_SIZE),
            decks,
            threshold,
            reshuffles: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.build(decks);
        shoe.shuffle();
        shoe
    }

    /// Regenerates the shoe with `decks` ordered decks, discarding what remains.
    pub fn build(&mut self, decks: u8) {
        self.decks = decks;
        self.cards.clear();
        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    self.cards.push(Card::new(suit, rank));
                }
            }
        }
    }

    /// Applies a uniform random permutation to the remaining cards.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Draws one card, rebuilding and reshuffling first if below threshold.
    pub fn draw(&mut self) -> Card {
        if self.cards.len() < self.threshold {
            self.reshuffle();
        }
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            self.reshuffle();
        }
    }

    fn reshuffle(&mut self) {
        debug!(
            remaining = self.cards.len(),
            decks = self.decks,
            "rebuilding shoe"
        );
        self.build(self.decks.max(1));
        self.shuffle();
        self.reshuffles += 1;
    }

    /// Places `draws` on top of the shoe so they come out in the given order.
    ///
    /// Existing cards stay underneath. Used to replay a known sequence.
    pub fn stack(&mut self, draws: &[Card]) {
        self.cards.extend(draws.iter().rev().copied());
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the rebuild threshold.
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns the number of decks per build.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns how many times the shoe has been rebuilt since creation.
    #[must_use]
    pub const fn reshuffles(&self) -> u32 {
        self.reshuffles
    }
}
