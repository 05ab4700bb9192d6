//! Error types for table and round operations.

use thiserror::Error;

use crate::money::Money;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck has no cards left.
    #[error("the dealer has run out of cards")]
    DeckExhausted,
}

impl DrawError {
    /// Returns whether the error must end the session. Always `true`.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        true
    }
}

/// Errors that can occur when seating or removing players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatError {
    /// The requested number of players does not fit the table.
    #[error("the number of players must be between 1 and {available}, got {requested}")]
    InvalidPlayerCount {
        /// Number of players asked for.
        requested: usize,
        /// Seats still free at the table.
        available: usize,
    },
    /// Player indices start at 1.
    #[error("a player cannot have a zero or negative number associated to them")]
    InvalidIndex,
    /// Players cannot sit down while a round is played.
    #[error("players cannot be seated during a round")]
    InvalidState,
    /// No player sits at the given seat.
    #[error("seat {seat} is out of bounds")]
    SeatNotFound {
        /// The seat position that was requested.
        seat: usize,
    },
}

impl SeatError {
    /// Returns whether the error must end the session.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::SeatNotFound { .. })
    }
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Bet outside of `[min, max]`.
    #[error("invalid bet: it must be greater or equal to {min} and less or equal to {max}")]
    OutOfRange {
        /// Minimum bet at the table.
        min: Money,
        /// The player's available cash.
        max: Money,
    },
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Nobody is seated at the table.
    #[error("no players are seated at the table")]
    NoPlayers,
    /// A seated player has not placed a bet.
    #[error("player #{index} has not placed a bet")]
    MissingBet {
        /// Index of the player without a bet.
        index: usize,
    },
    /// The deck ran out while dealing.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Errors that can occur during player actions.
///
/// Rule rejections (for example doubling down without enough cash) are not
/// errors; they are reported through [`ActionOutcome`](crate::ActionOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The deck ran out while serving the player.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Errors that can occur during the dealer turn and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The deck ran out while the dealer was drawing.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Errors that can occur when closing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CleanupError {
    /// Invalid game state for cleanup.
    #[error("invalid game state for cleanup")]
    InvalidState,
}

impl DealError {
    /// Returns whether the error must end the session.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Draw(_))
    }
}

impl ActionError {
    /// Returns whether the error must end the session.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Draw(_))
    }
}

impl ShowdownError {
    /// Returns whether the error must end the session.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Draw(_))
    }
}
