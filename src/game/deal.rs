use log::{debug, info};
use rand::Rng;

use crate::error::DealError;
use crate::result::{Outcome, PushReason, WinReason};

use super::{Game, RoundState};

impl<R: Rng> Game<R> {
    /// Rebuilds the shoe if it has run low.
    ///
    /// Returns `true` if a rebuild was performed.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game is waiting for the next round.
    pub fn check_shoe(&mut self) -> Result<bool, DealError> {
        if self.state != RoundState::ShoeCheck {
            return Err(DealError::InvalidState);
        }

        let reshuffled = self.needs_reshuffle();
        if reshuffled {
            info!(
                "{} card(s) left, rebuilding {}-deck shoe",
                self.shoe.remaining_count(),
                self.shoe.decks()
            );
            self.shoe.rebuild();
        }

        self.state = RoundState::ResetHands;
        Ok(reshuffled)
    }

    /// Clears both hands and deals player, dealer, player, dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe check has not run, or if the shoe runs
    /// out mid-deal.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::ResetHands {
            return Err(DealError::InvalidState);
        }

        self.player.reset_hand();
        self.dealer.reset_hand();
        self.outcome = None;
        self.player_turn_played = false;
        self.dealer_turn_played = false;
        self.state = RoundState::InitialDeal;

        for _ in 0..2 {
            self.player.hit(&mut self.shoe)?;
            self.dealer.hit(&mut self.shoe)?;
        }

        debug!(
            "dealt: player {}, dealer {}",
            self.player.total_value(),
            self.dealer.total_value()
        );
        self.state = RoundState::BlackjackCheck;
        Ok(())
    }

    /// Settles the round immediately if either side holds a natural.
    ///
    /// Returns the outcome when a natural ended the round, `None` when play
    /// moves on to the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial deal has not happened.
    pub fn check_blackjack(&mut self) -> Result<Option<Outcome>, DealError> {
        if self.state != RoundState::BlackjackCheck {
            return Err(DealError::InvalidState);
        }

        let outcome = match (self.player.is_blackjack(), self.dealer.is_blackjack()) {
            (true, true) => Some(Outcome::Push(PushReason::BothBlackjack)),
            (true, false) => Some(Outcome::PlayerWins(WinReason::Blackjack)),
            (false, true) => Some(Outcome::DealerWins(WinReason::Blackjack)),
            (false, false) => None,
        };

        match outcome {
            Some(outcome) => self.settle(outcome),
            None => self.state = RoundState::PlayerTurn,
        }
        Ok(outcome)
    }

    /// Runs the shoe check, the deal and the blackjack check in one go.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game is waiting for the next round.
    pub fn start_round(&mut self) -> Result<Option<Outcome>, DealError> {
        self.check_shoe()?;
        self.deal()?;
        self.check_blackjack()
    }
}
