//! Round result types for showdown and cleanup.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::money::Money;

/// How a player's round was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Won with a blackjack.
    Blackjack,
    /// Won (dealer bust or a higher hand).
    Win,
    /// Same value as the dealer.
    Push,
    /// Insured against a dealer blackjack; nothing lost.
    Insured,
    /// Lower hand than the dealer.
    Lose,
    /// Went over 21.
    Bust,
    /// Surrendered; the remaining bet is lost.
    Surrendered,
}

impl Outcome {
    /// Returns whether the player gained money.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Blackjack | Self::Win)
    }

    /// Returns whether the player lost money.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Lose | Self::Bust | Self::Surrendered)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Blackjack => "GOT BLACKJACK AND WON",
            Self::Win => "HAND IS SUPERIOR TO THE DEALER AND WON",
            Self::Push => "HAND IS EQUAL TO THE DEALER. NOTHING WON OR LOST",
            Self::Insured => "GOT INSURANCE AND LOSES NOTHING",
            Self::Lose => "HAS AN INFERIOR HAND AND LOST",
            Self::Bust => "HAS BUSTED AND LOST",
            Self::Surrendered => "HAS SURRENDERED AND LOST",
        };
        f.write_str(text)
    }
}

/// Result for a single player after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player index.
    pub index: usize,
    /// How the round was settled.
    pub outcome: Outcome,
    /// The bet at stake when settling (halved after a surrender).
    pub bet: Money,
    /// Money added to the player's cash.
    pub profit: Money,
    /// Money taken from the player's cash.
    pub loss: Money,
    /// Cash after settlement.
    pub cash: Money,
    /// The player's hand value.
    pub player_value: u8,
}

impl PlayerResult {
    /// Net change in cash in cents (positive = profit, negative = loss).
    #[must_use]
    pub const fn net_cents(&self) -> i64 {
        self.profit.signed_diff(self.loss)
    }
}

impl fmt::Display for PlayerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PLAYER #{} {}", self.index, self.outcome)?;
        if self.outcome.is_win() {
            write!(f, " {}$", self.profit)?;
        } else if self.outcome.is_loss() {
            write!(f, " {}$", self.loss)?;
        }
        Ok(())
    }
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// The number of cards in the dealer's final hand.
    pub dealer_cards: usize,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Returns the result for the player with the given index.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&PlayerResult> {
        self.players.iter().find(|result| result.index == index)
    }
}

/// Players removed from the table when a round is closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// Indices of players who asked to leave.
    pub left: Vec<usize>,
    /// Indices of players who could no longer cover the minimum bet.
    pub broke: Vec<usize>,
    /// Whether the table is now empty and the game is over.
    pub table_empty: bool,
}
