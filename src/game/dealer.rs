extern crate alloc;

use alloc::vec::Vec;

use core::cmp::Ordering;

use log::debug;
use rand::Rng;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{Outcome, PushReason, RoundResult, WinReason};

use super::{Game, RoundState};

impl<R: Rng> Game<R> {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer draws while its total is at most
    /// [`dealer_hits_through`](crate::GameOptions::dealer_hits_through) and
    /// never decides anything itself. Soft and hard totals are treated alike.
    /// A bust ends the round with the player winning; otherwise the game
    /// moves on to [`resolve`](Self::resolve).
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the shoe is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != RoundState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer_turn_played = true;
        let mut drawn_cards = Vec::new();

        while self.dealer.total_value() <= self.options.dealer_hits_through {
            let card = self.dealer.hit(&mut self.shoe)?;
            debug!("dealer draws {card}, total {}", self.dealer.total_value());
            drawn_cards.push(card);
        }

        if self.dealer.is_bust() {
            self.settle(Outcome::PlayerWins(WinReason::DealerBust));
        } else {
            self.state = RoundState::Resolution;
        }

        Ok(drawn_cards)
    }

    /// Compares totals once both sides are standing.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in resolution state.
    pub fn resolve(&mut self) -> Result<Outcome, ShowdownError> {
        if self.state != RoundState::Resolution {
            return Err(ShowdownError::InvalidState);
        }

        let outcome = match self.player.total_value().cmp(&self.dealer.total_value()) {
            Ordering::Equal => Outcome::Push(PushReason::Tie),
            Ordering::Greater => Outcome::PlayerWins(WinReason::HigherTotal),
            Ordering::Less => Outcome::DealerWins(WinReason::HigherTotal),
        };
        self.settle(outcome);
        Ok(outcome)
    }

    /// Closes the round and readies the game for the next shoe check.
    ///
    /// Hands stay on the table until the next deal so they can still be
    /// inspected.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not ended.
    pub fn finish_round(&mut self) -> Result<RoundResult, ShowdownError> {
        let result = self.round_result().ok_or(ShowdownError::InvalidState)?;
        self.state = RoundState::ShoeCheck;
        Ok(result)
    }
}
