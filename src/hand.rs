//! Hand representation and soft-ace evaluation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Value at which a hand is a natural or, above it, bust.
pub const BLACKJACK: u32 = 21;

fn evaluate_cards(cards: &[Card]) -> (u32, bool) {
    let mut value: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += u32::from(card.value());
    }

    // One downgrade per ace, only while still over 21.
    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// The cards held by one participant during a round.
///
/// The total is computed from the cards on every call, so it can never go
/// stale after a mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in the order they were received.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces start at 11; each one is downgraded to 1 only while the sum would
    /// otherwise exceed 21.
    #[must_use]
    pub fn total_value(&self) -> u32 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural: exactly two cards worth 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total_value() == BLACKJACK
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total_value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        ranks.iter().map(|&r| Card::new(r, Suit::Hearts)).collect()
    }

    #[test]
    fn empty_hand_is_zero() {
        let hand = Hand::new();
        assert_eq!(hand.total_value(), 0);
        assert!(hand.is_empty());
        assert!(!hand.is_bust());
        assert!(!hand.is_blackjack());
    }

    #[test]
    fn aces_downgrade_only_as_needed() {
        assert_eq!(hand(&[Rank::Ace, Rank::Ace]).total_value(), 12);
        assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Nine]).total_value(), 21);
        assert_eq!(
            hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Nine]).total_value(),
            12
        );
        assert_eq!(hand(&[Rank::Ace, Rank::Six]).total_value(), 17);
        assert!(hand(&[Rank::Ace, Rank::Six]).is_soft());
        assert!(!hand(&[Rank::Ace, Rank::Six, Rank::Ten]).is_soft());
    }

    #[test]
    fn bust_after_every_ace_is_spent() {
        let h = hand(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen]);
        assert_eq!(h.total_value(), 22);
        assert!(h.is_bust());

        let many: Hand = core::iter::repeat_n(Card::new(Rank::Ace, Suit::Clubs), 24).collect();
        assert_eq!(many.total_value(), 24);
        assert!(many.is_bust());
    }

    #[test]
    fn large_hands_are_not_clamped() {
        let mut kings: Hand = core::iter::repeat_n(Card::new(Rank::King, Suit::Spades), 25).collect();
        kings.add_card(Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(kings.total_value(), 251);
        assert!(kings.is_bust());

        let aces: Hand = core::iter::repeat_n(Card::new(Rank::Ace, Suit::Clubs), 30).collect();
        assert_eq!(aces.total_value(), 30);
        assert!(!aces.is_soft());
    }

    #[test]
    fn blackjack_needs_exactly_two_cards() {
        assert!(hand(&[Rank::Ace, Rank::King]).is_blackjack());
        assert!(hand(&[Rank::Ten, Rank::Ace]).is_blackjack());
        let three_sevens = hand(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        assert_eq!(three_sevens.total_value(), 21);
        assert!(!three_sevens.is_blackjack());
    }

    #[test]
    fn value_tracks_mutation() {
        let mut h = hand(&[Rank::Ten, Rank::Six]);
        assert_eq!(h.total_value(), 16);
        h.add_card(Card::new(Rank::Eight, Suit::Spades));
        assert_eq!(h.total_value(), 24);
        assert_eq!(h.card_count(), 3);
    }
}
