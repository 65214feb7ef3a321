//! Game configuration options.

use crate::error::ConfigError;
use crate::hand::BLACKJACK;
use crate::shoe::{MAX_DECKS, MIN_DECKS};

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use shoejack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_reshuffle_below(40)
///     .with_dealer_hits_through(16);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of decks in the shoe (1 to 6).
    pub decks: u8,
    /// The shoe is rebuilt before a round when fewer cards than this remain.
    pub reshuffle_below: usize,
    /// The dealer keeps hitting while its total is at most this value.
    pub dealer_hits_through: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            reshuffle_below: 20,
            dealer_hits_through: 17,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use shoejack::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the remaining-card count below which the shoe is rebuilt.
    ///
    /// # Example
    ///
    /// ```
    /// use shoejack::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_below(30);
    /// assert_eq!(options.reshuffle_below, 30);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_below(mut self, cards: usize) -> Self {
        self.reshuffle_below = cards;
        self
    }

    /// Sets the highest total the dealer still hits on.
    ///
    /// # Example
    ///
    /// ```
    /// use shoejack::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_hits_through(16);
    /// assert_eq!(options.dealer_hits_through, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_hits_through(mut self, total: u32) -> Self {
        self.dealer_hits_through = total;
        self
    }

    /// Checks the options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if `decks` is outside
    /// `1..=6`, or [`ConfigError::DealerLimit`] if the dealer would hit on 21.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.decks < MIN_DECKS || self.decks > MAX_DECKS {
            return Err(ConfigError::InvalidConfiguration { decks: self.decks });
        }
        if self.dealer_hits_through >= BLACKJACK {
            return Err(ConfigError::DealerLimit {
                limit: self.dealer_hits_through,
            });
        }
        Ok(())
    }
}
