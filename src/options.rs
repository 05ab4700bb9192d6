//! Table configuration options and the fixed house rules.

use crate::money::{Money, Ratio};

/// The dealer keeps drawing while the hand value is at or below this.
pub const DEALER_HITS_ON: u8 = 16;

/// Profit on a normal win, as a multiple of the bet.
pub const WIN_MULTIPLIER: u64 = 2;

/// Profit on a blackjack win, as a fraction of the bet (3:2).
pub const BLACKJACK_PAYS: Ratio = Ratio::new(3, 2);

/// Part of the bet still lost after surrendering.
pub const SURRENDER_KEEPS: Ratio = Ratio::new(1, 2);

/// Which cards complete an Ace into a blackjack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlackjackRule {
    /// Any ten-value card (Ten, Jack, Queen, King).
    #[default]
    AnyTenValue,
    /// Only a Jack. Matches older tables that recognised nothing else.
    JackOnly,
}

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{GameOptions, Money};
///
/// let options = GameOptions::default()
///     .with_max_players(2)
///     .with_min_bet(10);
/// assert_eq!(options.min_bet, Money::from_dollars(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Maximum number of players seated at once.
    pub max_players: usize,
    /// Minimum bet; players holding less cash are removed.
    pub min_bet: Money,
    /// Cash every newly seated player starts with.
    pub starting_cash: Money,
    /// Which cards complete a blackjack.
    pub blackjack_rule: BlackjackRule,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_players: 4,
            min_bet: Money::from_dollars(25),
            starting_cash: Money::from_dollars(250),
            blackjack_rule: BlackjackRule::AnyTenValue,
        }
    }
}

impl GameOptions {
    /// Sets the table capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_players(6);
    /// assert_eq!(options.max_players, 6);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets the minimum bet in whole dollars.
    #[must_use]
    pub const fn with_min_bet(mut self, dollars: u64) -> Self {
        self.min_bet = Money::from_dollars(dollars);
        self
    }

    /// Sets the starting cash for new players in whole dollars.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameOptions, Money};
    ///
    /// let options = GameOptions::default().with_starting_cash(500);
    /// assert_eq!(options.starting_cash, Money::from_dollars(500));
    /// ```
    #[must_use]
    pub const fn with_starting_cash(mut self, dollars: u64) -> Self {
        self.starting_cash = Money::from_dollars(dollars);
        self
    }

    /// Sets the blackjack detection rule.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{BlackjackRule, GameOptions};
    ///
    /// let options = GameOptions::default().with_blackjack_rule(BlackjackRule::JackOnly);
    /// assert_eq!(options.blackjack_rule, BlackjackRule::JackOnly);
    /// ```
    #[must_use]
    pub const fn with_blackjack_rule(mut self, rule: BlackjackRule) -> Self {
        self.blackjack_rule = rule;
        self
    }
}
