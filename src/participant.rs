//! Player and dealer seats.

extern crate alloc;

use alloc::string::String;

use rand::Rng;

use crate::card::Card;
use crate::error::ShoeError;
use crate::hand::Hand;
use crate::shoe::Shoe;

/// Name the dealer always plays under.
pub const DEALER_NAME: &str = "Dealer";

/// Which side of the table a participant sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The human player.
    Player,
    /// The automated dealer. Only the renderer treats it differently.
    Dealer,
}

/// A named holder of one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    role: Role,
    hand: Hand,
}

impl Participant {
    /// Creates a player with the given name.
    #[must_use]
    pub fn player(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::Player,
            hand: Hand::new(),
        }
    }

    /// Creates the dealer.
    #[must_use]
    pub fn dealer() -> Self {
        Self {
            name: String::from(DEALER_NAME),
            role: Role::Dealer,
            hand: Hand::new(),
        }
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Replaces the hand with a fresh empty one.
    pub fn reset_hand(&mut self) {
        self.hand = Hand::new();
    }

    /// Draws one card from `shoe` into the hand and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if the shoe is empty.
    pub fn hit<R: Rng>(&mut self, shoe: &mut Shoe<R>) -> Result<Card, ShoeError> {
        let card = shoe.draw()?;
        self.hand.add_card(card);
        Ok(card)
    }

    /// See [`Hand::total_value`].
    #[must_use]
    pub fn total_value(&self) -> u32 {
        self.hand.total_value()
    }

    /// See [`Hand::is_blackjack`].
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// See [`Hand::is_bust`].
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// See [`Hand::card_count`].
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.card_count()
    }
}
