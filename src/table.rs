//! The boundary between the engine and whatever drives it.
//!
//! The engine never reads input or prints. A [`Table`] implementation supplies
//! configuration and player decisions, and receives a [`Snapshot`] after every
//! meaningful transition so it can draw the table.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;
use crate::participant::{Participant, Role};
use crate::result::Outcome;

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// End the turn.
    Stay,
}

/// The transition a snapshot was taken after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Moment {
    /// Initial four cards are out.
    Dealt,
    /// Naturals have been checked.
    BlackjackChecked,
    /// The player took a card.
    PlayerHit,
    /// The dealer finished drawing.
    DealerPlayed,
    /// The round has an outcome.
    Resolved,
}

/// One participant as seen in a snapshot.
///
/// `cards` always holds the whole hand. `hole_concealed` only tells the
/// renderer to hide the second card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantView {
    /// Display name.
    pub name: String,
    /// Seat.
    pub role: Role,
    /// Every card in the hand.
    pub cards: Vec<Card>,
    /// Full hand total.
    pub total: u32,
    /// Whether the renderer should hide the hole card.
    pub hole_concealed: bool,
}

impl ParticipantView {
    pub(crate) fn new(participant: &Participant, hole_concealed: bool) -> Self {
        Self {
            name: String::from(participant.name()),
            role: participant.role(),
            cards: participant.hand().cards().to_vec(),
            total: participant.total_value(),
            hole_concealed,
        }
    }

    /// Cards a renderer should show face up.
    #[must_use]
    pub fn shown_cards(&self) -> &[Card] {
        if self.hole_concealed {
            &self.cards[..self.cards.len().min(1)]
        } else {
            &self.cards
        }
    }

    /// Total of the face-up cards.
    #[must_use]
    pub fn shown_total(&self) -> u32 {
        if self.hole_concealed {
            self.shown_cards().iter().copied().collect::<Hand>().total_value()
        } else {
            self.total
        }
    }
}

/// State of the table after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// What just happened.
    pub moment: Moment,
    /// The player's side.
    pub player: ParticipantView,
    /// The dealer's side.
    pub dealer: ParticipantView,
    /// Set once the round has ended.
    pub outcome: Option<Outcome>,
}

/// External collaborator that feeds the engine and renders its state.
///
/// Every method is a blocking request; implementations are expected to keep
/// prompting until they have a valid answer.
pub trait Table {
    /// Number of decks for the session, expected in `1..=6`.
    fn request_deck_count(&mut self) -> u8;

    /// The player's name.
    fn request_player_name(&mut self) -> String;

    /// The player's next decision.
    fn request_action(&mut self) -> Action;

    /// Whether to play another round.
    fn request_continue(&mut self) -> bool;

    /// Receives the table state after a transition.
    fn render(&mut self, snapshot: &Snapshot);

    /// Called when the shoe is rebuilt before a round.
    fn shuffled(&mut self) {}
}
