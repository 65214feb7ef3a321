//! Round state types.

/// Where a round currently stands.
///
/// A round walks these states top to bottom, skipping the turns when a
/// natural or a bust settles it early, and [`RoundEnd`](Self::RoundEnd) loops
/// back to [`ShoeCheck`](Self::ShoeCheck) for the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundState {
    /// About to decide whether the shoe needs rebuilding.
    #[default]
    ShoeCheck,
    /// About to clear both hands.
    ResetHands,
    /// Dealing the four initial cards.
    InitialDeal,
    /// Checking for naturals.
    BlackjackCheck,
    /// Waiting for player decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Comparing totals.
    Resolution,
    /// Round has an outcome.
    RoundEnd,
}

impl RoundState {
    /// Whether a renderer should keep the dealer's hole card face down.
    #[must_use]
    pub const fn hides_hole_card(self) -> bool {
        matches!(self, Self::BlackjackCheck | Self::PlayerTurn)
    }

    /// Whether the round is between deal and outcome.
    #[must_use]
    pub const fn in_progress(self) -> bool {
        matches!(
            self,
            Self::InitialDeal
                | Self::BlackjackCheck
                | Self::PlayerTurn
                | Self::DealerTurn
                | Self::Resolution
        )
    }
}

#[cfg(test)]
mod tests {
    use super::RoundState;

    #[test]
    fn hole_card_hidden_only_before_dealer_turn() {
        assert!(RoundState::BlackjackCheck.hides_hole_card());
        assert!(RoundState::PlayerTurn.hides_hole_card());
        assert!(!RoundState::DealerTurn.hides_hole_card());
        assert!(!RoundState::RoundEnd.hides_hole_card());
    }

    #[test]
    fn starts_at_shoe_check() {
        assert_eq!(RoundState::default(), RoundState::ShoeCheck);
        assert!(!RoundState::default().in_progress());
    }
}
