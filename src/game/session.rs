use log::{debug, info, warn};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::error::{GameError, ShowdownError};
use crate::options::GameOptions;
use crate::result::{RoundResult, SessionSummary};
use crate::table::{Action, Moment, Table};

use super::{Game, RoundState};

impl Game<ChaCha8Rng> {
    /// Asks `table` for the deck count and player name and sets up a game.
    ///
    /// The deck count from the table overrides `options.decks`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if the table supplies a deck count
    /// outside `1..=6` or the other options are invalid.
    pub fn from_table<T: Table>(
        table: &mut T,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, GameError> {
        let options = options.with_decks(table.request_deck_count());
        if let Err(err) = options.validate() {
            warn!("rejected table configuration: {err}");
            return Err(err.into());
        }
        let name = table.request_player_name();
        Ok(Self::new(options, name, seed)?)
    }
}

impl<R: Rng> Game<R> {
    /// Plays one full round against `table`, from shoe check to outcome.
    ///
    /// The table receives a snapshot after the deal, the blackjack check,
    /// every player hit, the dealer turn and the resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is mid-round or the shoe runs dry.
    pub fn play_round<T: Table>(&mut self, table: &mut T) -> Result<RoundResult, GameError> {
        if self.check_shoe()? {
            table.shuffled();
        }

        self.deal()?;
        table.render(&self.snapshot(Moment::Dealt));

        self.check_blackjack()?;
        table.render(&self.snapshot(Moment::BlackjackChecked));

        while self.state == RoundState::PlayerTurn {
            match table.request_action() {
                Action::Hit => {
                    self.hit()?;
                    table.render(&self.snapshot(Moment::PlayerHit));
                }
                Action::Stay => self.stay()?,
            }
        }

        if self.state == RoundState::DealerTurn {
            self.dealer_play()?;
            table.render(&self.snapshot(Moment::DealerPlayed));
        }

        if self.state == RoundState::Resolution {
            self.resolve()?;
        }

        if self.state != RoundState::RoundEnd {
            return Err(ShowdownError::InvalidState.into());
        }
        table.render(&self.snapshot(Moment::Resolved));

        Ok(self.finish_round()?)
    }

    /// Plays rounds until the table declines to continue.
    ///
    /// # Errors
    ///
    /// Stops at the first round that fails and returns its error.
    pub fn run<T: Table>(&mut self, table: &mut T) -> Result<SessionSummary, GameError> {
        let mut summary = SessionSummary::default();

        loop {
            let result = self.play_round(table)?;
            summary.record(result.outcome);
            debug!("session so far: {summary:?}");

            if !table.request_continue() {
                break;
            }
        }

        info!(
            "session over after {} round(s): {} won, {} lost, {} pushed",
            summary.rounds, summary.player_wins, summary.dealer_wins, summary.pushes
        );
        Ok(summary)
    }
}
