//! Game engine and round state machine.

extern crate alloc;

use alloc::string::String;

use log::info;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::error::ConfigError;
use crate::options::GameOptions;
use crate::participant::Participant;
use crate::result::{Outcome, RoundResult};
use crate::shoe::Shoe;
use crate::table::{Moment, ParticipantView, Snapshot};

mod actions;
mod dealer;
mod deal;
mod session;
pub mod state;

pub use state::RoundState;

/// A single-player blackjack game against an automated dealer.
///
/// The game owns the shoe and both participants. A round can be driven one
/// step at a time ([`check_shoe`](Self::check_shoe), [`deal`](Self::deal),
/// [`check_blackjack`](Self::check_blackjack), [`hit`](Self::hit),
/// [`stay`](Self::stay), [`dealer_play`](Self::dealer_play),
/// [`resolve`](Self::resolve), [`finish_round`](Self::finish_round)), or
/// handed to a [`Table`](crate::Table) with [`play_round`](Self::play_round)
/// and [`run`](Self::run).
///
/// # Example
///
/// ```
/// use shoejack::{Game, GameOptions, RoundState};
///
/// let mut game = Game::new(GameOptions::default(), "Ada", 42).unwrap();
/// game.start_round().unwrap();
/// while game.state() == RoundState::PlayerTurn {
///     if game.player().total_value() < 17 {
///         game.hit().unwrap();
///     } else {
///         game.stay().unwrap();
///     }
/// }
/// if game.state() == RoundState::DealerTurn {
///     game.dealer_play().unwrap();
/// }
/// if game.state() == RoundState::Resolution {
///     game.resolve().unwrap();
/// }
/// let result = game.finish_round().unwrap();
/// println!("{}", result.outcome);
/// ```
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    /// Game options. `decks` always matches the shoe.
    options: GameOptions,
    shoe: Shoe<R>,
    player: Participant,
    dealer: Participant,
    state: RoundState,
    outcome: Option<Outcome>,
    player_turn_played: bool,
    dealer_turn_played: bool,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with a shoe shuffled from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn new(
        options: GameOptions,
        player_name: impl Into<String>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        let shoe = Shoe::with_seed(options.decks, seed)
            .map_err(|_| ConfigError::InvalidConfiguration {
                decks: options.decks,
            })?;
        Self::with_shoe(options, player_name, shoe)
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new game around an existing shoe.
    ///
    /// The shoe's deck count replaces `options.decks`.
    ///
    /// # Errors
    ///
    /// Returns an error if the remaining options are invalid.
    pub fn with_shoe(
        options: GameOptions,
        player_name: impl Into<String>,
        shoe: Shoe<R>,
    ) -> Result<Self, ConfigError> {
        let options = options.with_decks(shoe.decks());
        options.validate()?;
        let player = Participant::player(player_name);
        info!(
            "new game for {} with {} deck(s)",
            player.name(),
            options.decks
        );

        Ok(Self {
            options,
            shoe,
            player,
            dealer: Participant::dealer(),
            state: RoundState::ShoeCheck,
            outcome: None,
            player_turn_played: false,
            dealer_turn_played: false,
        })
    }

    /// Returns whether the shoe is low enough to be rebuilt before dealing.
    pub fn needs_reshuffle(&self) -> bool {
        self.shoe.remaining_count() < self.options.reshuffle_below
    }

    /// Moves the round to its end with `outcome`.
    fn settle(&mut self, outcome: Outcome) {
        info!(
            "round over: {outcome:?} (player {}, dealer {})",
            self.player.total_value(),
            self.dealer.total_value()
        );
        self.outcome = Some(outcome);
        self.state = RoundState::RoundEnd;
    }
}

impl<R> Game<R> {
    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the shoe.
    pub const fn shoe(&self) -> &Shoe<R> {
        &self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining_count()
    }

    /// Returns the player.
    pub const fn player(&self) -> &Participant {
        &self.player
    }

    /// Returns the dealer.
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the outcome once the round has ended.
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the round result once the round has ended.
    pub fn round_result(&self) -> Option<RoundResult> {
        if self.state != RoundState::RoundEnd {
            return None;
        }
        self.outcome.map(|outcome| RoundResult {
            outcome,
            player_value: self.player.total_value(),
            dealer_value: self.dealer.total_value(),
            player_turn_played: self.player_turn_played,
            dealer_turn_played: self.dealer_turn_played,
        })
    }

    /// Captures the table for rendering.
    pub fn snapshot(&self, moment: Moment) -> Snapshot {
        Snapshot {
            moment,
            player: ParticipantView::new(&self.player, false),
            dealer: ParticipantView::new(&self.dealer, self.state.hides_hole_card()),
            outcome: self.outcome,
        }
    }
}
