//! Round outcome types.

use core::fmt;

/// Why one side won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinReason {
    /// The winner was dealt a natural.
    Blackjack,
    /// The player went over 21.
    PlayerBust,
    /// The dealer went over 21.
    DealerBust,
    /// Neither busted and the winner's total was higher.
    HigherTotal,
}

/// Why the round was tied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PushReason {
    /// Both sides were dealt a natural.
    BothBlackjack,
    /// Equal totals at resolution.
    Tie,
}

/// Result of a round from the table's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player wins.
    PlayerWins(WinReason),
    /// The dealer wins.
    DealerWins(WinReason),
    /// Nobody wins.
    Push(PushReason),
}

impl Outcome {
    /// Returns whether the player won.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::PlayerWins(_))
    }

    /// Returns whether the dealer won.
    #[must_use]
    pub const fn dealer_won(self) -> bool {
        matches!(self, Self::DealerWins(_))
    }

    /// Returns whether the round was a push.
    #[must_use]
    pub const fn is_push(self) -> bool {
        matches!(self, Self::Push(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Push(PushReason::BothBlackjack) => "Both got blackjack. It's a tie!",
            Self::Push(PushReason::Tie) => "It's a tie!",
            Self::PlayerWins(WinReason::Blackjack) => "Blackjack! Player wins.",
            Self::PlayerWins(WinReason::DealerBust) => "Dealer busted! Player wins.",
            Self::PlayerWins(_) => "Player wins!",
            Self::DealerWins(WinReason::Blackjack) => "Dealer has blackjack. Dealer wins.",
            Self::DealerWins(WinReason::PlayerBust) => "Player busted! Dealer wins.",
            Self::DealerWins(_) => "Dealer wins!",
        };
        f.write_str(text)
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The player's final total.
    pub player_value: u32,
    /// The dealer's final total.
    pub dealer_value: u32,
    /// Whether the player ever acted (no natural ended the round).
    pub player_turn_played: bool,
    /// Whether the dealer played out its hand.
    pub dealer_turn_played: bool,
}

/// Running tally over a session. Kept in memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds completed.
    pub rounds: usize,
    /// Rounds the player won.
    pub player_wins: usize,
    /// Rounds the dealer won.
    pub dealer_wins: usize,
    /// Tied rounds.
    pub pushes: usize,
}

impl SessionSummary {
    /// Adds one finished round to the tally.
    pub const fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::PlayerWins(_) => self.player_wins += 1,
            Outcome::DealerWins(_) => self.dealer_wins += 1,
            Outcome::Push(_) => self.pushes += 1,
        }
    }
}
