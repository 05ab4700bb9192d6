//! Game state types.

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for players to sit down.
    Seating,
    /// Accepting bets for the next round.
    Betting,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Dealer is done; bets can be settled.
    RoundOver,
    /// Bets are settled; the table can be cleaned up for the next round.
    Settled,
    /// Nobody is left at the table.
    Finished,
}

impl GameState {
    /// Returns whether a round is being played (between the deal and cleanup).
    #[must_use]
    pub const fn is_in_round(self) -> bool {
        matches!(
            self,
            Self::PlayerTurn | Self::DealerTurn | Self::RoundOver | Self::Settled
        )
    }
}
