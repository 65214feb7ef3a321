use log::debug;
use rand::Rng;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::{Outcome, WinReason};

use super::{Game, RoundState};

impl<R: Rng> Game<R> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the round at once with the dealer winning; the dealer does
    /// not play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.player.hit(&mut self.shoe)?;
        self.player_turn_played = true;
        debug!("player hits {card}, total {}", self.player.total_value());

        if self.player.is_bust() {
            self.settle(Outcome::DealerWins(WinReason::PlayerBust));
        }

        Ok(card)
    }

    /// Player action: Stay (keep current hand and pass to the dealer).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stay(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.player_turn_played = true;
        debug!("player stays on {}", self.player.total_value());
        self.state = RoundState::DealerTurn;
        Ok(())
    }
}
