//! The multi-deck shoe.

extern crate alloc;

use alloc::vec::Vec;

use log::trace;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, standard_deck};
use crate::error::ShoeError;

/// Fewest decks a shoe may hold.
pub const MIN_DECKS: u8 = 1;
/// Most decks a shoe may hold.
pub const MAX_DECKS: u8 = 6;

/// Undealt card stock built from one to six standard decks.
///
/// The random source is injected at construction and reused for every
/// [`rebuild`](Self::rebuild), so a seeded generator yields a reproducible
/// sequence of shuffles. Shuffling uses [`SliceRandom::shuffle`], a
/// Fisher-Yates pass that produces a uniformly random permutation.
///
/// ```
/// use shoejack::Shoe;
///
/// let mut shoe = Shoe::with_seed(2, 7).unwrap();
/// assert_eq!(shoe.remaining_count(), 104);
/// shoe.draw().unwrap();
/// assert_eq!(shoe.remaining_count(), 103);
/// ```
#[derive(Debug, Clone)]
pub struct Shoe<R = ChaCha8Rng> {
    /// Stock; the top of the shoe is the end of the vector.
    cards: Vec<Card>,
    decks: u8,
    rng: R,
}

impl Shoe<ChaCha8Rng> {
    /// Creates a shoe shuffled by a `ChaCha8Rng` seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidConfiguration`] if `decks` is outside `1..=6`.
    pub fn with_seed(decks: u8, seed: u64) -> Result<Self, ShoeError> {
        Self::new(decks, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Shoe<R> {
    /// Builds `decks` standard decks and shuffles them with `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidConfiguration`] if `decks` is outside `1..=6`.
    pub fn new(decks: u8, rng: R) -> Result<Self, ShoeError> {
        check_decks(decks)?;
        let mut shoe = Self {
            cards: Vec::with_capacity(usize::from(decks) * DECK_SIZE),
            decks,
            rng,
        };
        shoe.rebuild();
        Ok(shoe)
    }

    /// Creates a shoe whose stock is exactly `draws`, dealt in that order.
    ///
    /// Meant for scripting rounds: the stock may be short or hold repeated
    /// cards, so the usual `decks * 52` composition does not hold until the
    /// next [`rebuild`](Self::rebuild). `rng` is kept for that rebuild.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidConfiguration`] for a bad deck count and
    /// [`ShoeError::StackTooLarge`] if `draws` holds more than `decks * 52` cards.
    pub fn stacked(decks: u8, draws: &[Card], rng: R) -> Result<Self, ShoeError> {
        check_decks(decks)?;
        let capacity = usize::from(decks) * DECK_SIZE;
        if draws.len() > capacity {
            return Err(ShoeError::StackTooLarge {
                requested: draws.len(),
                capacity,
            });
        }

        let mut cards = draws.to_vec();
        cards.reverse();
        Ok(Self { cards, decks, rng })
    }

    /// Discards the current stock and shuffles a fresh full shoe.
    pub fn rebuild(&mut self) {
        self.cards.clear();
        for _ in 0..self.decks {
            self.cards.extend(standard_deck());
        }
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if the shoe is empty.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        let card = self.cards.pop().ok_or(ShoeError::Exhausted)?;
        trace!("drew {card}, {} left", self.cards.len());
        Ok(card)
    }
}

impl<R> Shoe<R> {
    /// Number of undrawn cards.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.cards.len()
    }

    /// Number of decks the shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Size of a full shoe (`decks * 52`).
    #[must_use]
    pub fn capacity(&self) -> usize {
        usize::from(self.decks) * DECK_SIZE
    }

    /// Undrawn cards, bottom of the shoe first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

pub(crate) const fn check_decks(decks: u8) -> Result<(), ShoeError> {
    if decks < MIN_DECKS || decks > MAX_DECKS {
        return Err(ShoeError::InvalidConfiguration { decks });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn rejects_bad_deck_counts() {
        assert_eq!(
            Shoe::with_seed(0, 1).unwrap_err(),
            ShoeError::InvalidConfiguration { decks: 0 }
        );
        assert_eq!(
            Shoe::with_seed(7, 1).unwrap_err(),
            ShoeError::InvalidConfiguration { decks: 7 }
        );
    }

    #[test]
    fn draw_until_exhausted() {
        let mut shoe = Shoe::with_seed(1, 3).unwrap();
        for left in (0..DECK_SIZE).rev() {
            shoe.draw().unwrap();
            assert_eq!(shoe.remaining_count(), left);
        }
        assert_eq!(shoe.draw().unwrap_err(), ShoeError::Exhausted);
    }

    #[test]
    fn rebuild_restores_full_shoe() {
        let mut shoe = Shoe::with_seed(3, 11).unwrap();
        for _ in 0..100 {
            shoe.draw().unwrap();
        }
        shoe.rebuild();
        assert_eq!(shoe.remaining_count(), 3 * DECK_SIZE);
        assert_eq!(shoe.capacity(), 3 * DECK_SIZE);
    }

    #[test]
    fn same_seed_same_order() {
        let a = Shoe::with_seed(2, 99).unwrap();
        let b = Shoe::with_seed(2, 99).unwrap();
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn stacked_deals_in_order() {
        let draws = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Two, Suit::Clubs),
        ];
        let mut shoe = Shoe::stacked(1, &draws, ChaCha8Rng::seed_from_u64(0)).unwrap();
        assert_eq!(shoe.draw().unwrap(), draws[0]);
        assert_eq!(shoe.draw().unwrap(), draws[1]);
        assert_eq!(shoe.draw().unwrap_err(), ShoeError::Exhausted);
    }

    #[test]
    fn stacked_rebuild_restores_composition() {
        let draws = [Card::new(Rank::Ace, Suit::Spades); 3];
        let mut shoe = Shoe::stacked(2, &draws, ChaCha8Rng::seed_from_u64(4)).unwrap();
        assert_eq!(shoe.remaining_count(), 3);

        shoe.rebuild();
        assert_eq!(shoe.remaining_count(), shoe.capacity());
        for card in standard_deck() {
            assert_eq!(shoe.cards().iter().filter(|&&c| c == card).count(), 2);
        }
    }

    #[test]
    fn stacked_rejects_overfull() {
        let draws = [Card::new(Rank::Two, Suit::Clubs); DECK_SIZE + 1];
        assert_eq!(
            Shoe::stacked(1, &draws, ChaCha8Rng::seed_from_u64(0)).unwrap_err(),
            ShoeError::StackTooLarge {
                requested: DECK_SIZE + 1,
                capacity: DECK_SIZE,
            }
        );
    }
}
