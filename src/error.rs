//! Error types for game operations.

use thiserror::Error;

/// Errors raised while validating [`GameOptions`](crate::GameOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Deck count outside `1..=6`.
    #[error("deck count {decks} is outside 1..=6")]
    InvalidConfiguration {
        /// The rejected deck count.
        decks: u8,
    },
    /// Dealer hit limit would make the dealer draw at 21 or above.
    #[error("dealer hit limit {limit} must be below 21")]
    DealerLimit {
        /// The rejected limit.
        limit: u32,
    },
}

/// Errors that can occur on the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// Deck count outside `1..=6`.
    #[error("deck count {decks} is outside 1..=6")]
    InvalidConfiguration {
        /// The rejected deck count.
        decks: u8,
    },
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    Exhausted,
    /// A stacked draw sequence does not fit in the shoe.
    #[error("cannot stack {requested} cards into a shoe of {capacity}")]
    StackTooLarge {
        /// Number of cards requested.
        requested: usize,
        /// Shoe capacity (`decks * 52`).
        capacity: usize,
    },
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The shoe failed while dealing.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The shoe failed while drawing.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during the dealer turn and resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The shoe failed while the dealer was drawing.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors surfaced by the session driver ([`Game::run`](crate::Game::run)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The session could not be configured.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// Shoe failure outside a round step.
    #[error("shoe error: {0}")]
    Shoe(#[from] ShoeError),
    /// A round could not be started.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error("player action failed: {0}")]
    Action(#[from] ActionError),
    /// The dealer turn or resolution failed.
    #[error("showdown failed: {0}")]
    Showdown(#[from] ShowdownError),
}
