//! A seated player: hand, money and per-round state.

use core::fmt;

use crate::action::{ActionEvent, ActionOutcome};
use crate::card::Card;
use crate::error::{BetError, DrawError, SeatError};
use crate::hand::Hand;
use crate::money::Money;
use crate::options::{BLACKJACK_PAYS, BlackjackRule, SURRENDER_KEEPS, WIN_MULTIPLIER};

/// Value the dealer shows when its only card is an Ace.
const DEALER_SINGLE_ACE: u8 = 11;

/// A player seated at the table.
///
/// Cash and bet are tracked separately: the bet is never taken out of the cash
/// while the round is played. Settlement then either adds a profit to the
/// cash or subtracts the bet from it.
#[derive(Debug, Clone)]
pub struct Player {
    index: usize,
    cash: Money,
    bet: Money,
    profit: Money,
    min_bet: Money,
    hand: Hand,
    participating: bool,
    surrendered: bool,
    blackjack: bool,
    busted: bool,
    insured: bool,
    left: bool,
    last_action: Option<ActionOutcome>,
}

impl Player {
    /// Creates a player with the given 1-based index.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::InvalidIndex`] if `index` is 0.
    pub const fn new(index: usize, cash: Money, min_bet: Money) -> Result<Self, SeatError> {
        if index == 0 {
            return Err(SeatError::InvalidIndex);
        }
        Ok(Self {
            index,
            cash,
            bet: Money::ZERO,
            profit: Money::ZERO,
            min_bet,
            hand: Hand::new(),
            participating: true,
            surrendered: false,
            blackjack: false,
            busted: false,
            insured: false,
            left: false,
            last_action: None,
        })
    }

    /// Returns the player's index. Stable for the whole session.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the player's cash.
    #[must_use]
    pub const fn cash(&self) -> Money {
        self.cash
    }

    /// Returns the current bet (0 between rounds).
    #[must_use]
    pub const fn bet(&self) -> Money {
        self.bet
    }

    /// Returns the profit made in the last settled round.
    #[must_use]
    pub const fn profit(&self) -> Money {
        self.profit
    }

    /// Returns the minimum bet for this player.
    #[must_use]
    pub const fn min_bet(&self) -> Money {
        self.min_bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the value of the player's hand.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the player still has decisions to make this round.
    #[must_use]
    pub const fn is_participating(&self) -> bool {
        self.participating
    }

    /// Returns whether the player surrendered this round.
    #[must_use]
    pub const fn has_surrendered(&self) -> bool {
        self.surrendered
    }

    /// Returns whether the player was dealt a blackjack this round.
    #[must_use]
    pub const fn has_blackjack(&self) -> bool {
        self.blackjack
    }

    /// Returns whether the player's hand is over 21.
    ///
    /// Upgrading an Ace can push a hand over 21 without a hit, so this looks at
    /// the hand value as well as the bust recorded on the last card taken.
    #[must_use]
    pub const fn has_busted(&self) -> bool {
        self.busted || self.hand.is_bust()
    }

    /// Returns whether the player is insured this round.
    #[must_use]
    pub const fn is_insured(&self) -> bool {
        self.insured
    }

    /// Returns whether the player asked to leave after this round.
    #[must_use]
    pub const fn has_left(&self) -> bool {
        self.left
    }

    /// Returns the outcome of the player's most recent action this round.
    #[must_use]
    pub const fn last_action(&self) -> Option<&ActionOutcome> {
        self.last_action.as_ref()
    }

    /// Returns whether the player can no longer cover the minimum bet.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.cash.cents() < self.min_bet.cents()
    }

    /// Sets the bet for this round. Bets are placed in whole dollars.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::OutOfRange`] unless `min_bet <= dollars <= cash`.
    pub fn place_bet(&mut self, dollars: u64) -> Result<(), BetError> {
        let amount = Money::from_dollars(dollars);
        if amount < self.min_bet || amount > self.cash {
            return Err(BetError::OutOfRange {
                min: self.min_bet,
                max: self.cash,
            });
        }
        self.bet = amount;
        Ok(())
    }

    fn record(&mut self, event: ActionEvent) -> ActionOutcome {
        let outcome = ActionOutcome {
            player: self.index,
            event,
        };
        self.last_action = Some(outcome);
        outcome
    }

    /// Adds a card dealt outside of a player decision (the opening deal).
    pub fn receive(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Marks the player as holding a blackjack if the opening hand is one.
    ///
    /// On success the Ace is counted as 11 and the player's turn is over.
    /// Call at most once per round.
    pub fn check_blackjack(&mut self, rule: BlackjackRule) -> Option<ActionOutcome> {
        if !self.hand.is_blackjack(rule) {
            return None;
        }
        self.hand.apply_blackjack_ace_bonus();
        self.blackjack = true;
        self.participating = false;
        Some(self.record(ActionEvent::Blackjack))
    }

    /// Takes a card. Going bust ends the turn.
    pub fn hit(&mut self, card: Card) -> ActionOutcome {
        self.hand.add_card(card);
        if self.hand.is_bust() {
            self.busted = true;
            self.participating = false;
            self.record(ActionEvent::Busted { card })
        } else {
            self.record(ActionEvent::Hit { card })
        }
    }

    /// Ends the turn.
    pub fn stand(&mut self) -> ActionOutcome {
        self.participating = false;
        self.record(ActionEvent::Stood)
    }

    /// Returns whether the player has the cash to cover a doubled bet.
    #[must_use]
    pub fn can_double_down(&self) -> bool {
        self.bet * 2 <= self.cash
    }

    /// Doubles the bet, takes one card from `draw` and ends the turn.
    ///
    /// If the player cannot cover the doubled bet nothing changes, `draw` is
    /// not called, and the rejection is recorded.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `draw`.
    pub fn double_down<F>(&mut self, draw: F) -> Result<ActionOutcome, DrawError>
    where
        F: FnOnce() -> Result<Card, DrawError>,
    {
        if !self.can_double_down() {
            return Ok(self.record(ActionEvent::DoubleDownRejected {
                needed: self.bet * 2,
                cash: self.cash,
            }));
        }
        let card = draw()?;
        self.hand.add_card(card);
        self.bet *= 2;
        self.participating = false;
        if self.hand.is_bust() {
            self.busted = true;
        }
        Ok(self.record(ActionEvent::DoubledDown {
            card,
            bet: self.bet,
        }))
    }

    /// Gives up the hand and ends the turn. Half of the bet stays at stake.
    pub fn surrender(&mut self) -> ActionOutcome {
        self.participating = false;
        self.surrendered = true;
        self.bet = self.bet.scale(SURRENDER_KEEPS);
        self.record(ActionEvent::Surrendered { bet: self.bet })
    }

    /// Insures against a dealer blackjack. Only allowed while the dealer's
    /// visible value is a single Ace (11).
    pub fn insure(&mut self, dealer_value: u8) -> ActionOutcome {
        if dealer_value == DEALER_SINGLE_ACE {
            self.insured = true;
            self.record(ActionEvent::Insured)
        } else {
            self.record(ActionEvent::InsuranceRejected { dealer_value })
        }
    }

    /// Counts an Ace as 11.
    ///
    /// Each call adds another 10 points; nothing tracks which Ace was
    /// already upgraded.
    pub fn make_ace_eleven(&mut self) -> ActionOutcome {
        if self.hand.has_ace() {
            self.hand.upgrade_ace_value();
            self.record(ActionEvent::AceUpgraded {
                value: self.hand.value(),
            })
        } else {
            self.record(ActionEvent::AceUpgradeRejected)
        }
    }

    /// Asks to leave once the round is settled.
    pub fn leave(&mut self) -> ActionOutcome {
        if self.left {
            self.record(ActionEvent::AlreadyLeaving)
        } else {
            self.left = true;
            self.record(ActionEvent::Leaving)
        }
    }

    /// Records an unrecognised action code.
    pub fn reject_invalid(&mut self, code: char) -> ActionOutcome {
        self.record(ActionEvent::Invalid(code))
    }

    /// Pays a blackjack: profit is one and a half times the bet.
    pub fn win_blackjack(&mut self) -> Money {
        self.profit = self.bet.scale(BLACKJACK_PAYS);
        self.cash += self.profit;
        self.profit
    }

    /// Pays a normal win: profit is twice the bet.
    pub fn win(&mut self) -> Money {
        self.profit = self.bet * WIN_MULTIPLIER;
        self.cash += self.profit;
        self.profit
    }

    /// Takes the bet out of the player's cash.
    pub fn lose(&mut self) -> Money {
        let loss = self.bet.min(self.cash);
        self.profit = Money::ZERO;
        self.cash -= loss;
        loss
    }

    /// Settles a round that neither won nor lost money.
    pub const fn push(&mut self) {
        self.profit = Money::ZERO;
    }

    /// Restores the per-round state: flags, bet and hand.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.bet = Money::ZERO;
        self.participating = true;
        self.surrendered = false;
        self.blackjack = false;
        self.busted = false;
        self.insured = false;
        self.left = false;
        self.last_action = None;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} ~ Bet: {}$\n{}", self.index, self.bet, self.hand)?;
        if self.left {
            f.write_str(" WILL LEAVE NEXT ROUND")?;
        }
        if self.has_busted() {
            f.write_str(" BUSTED")?;
        }
        if self.surrendered {
            f.write_str(" SURRENDERED")?;
        }
        if self.blackjack {
            f.write_str(" GOT BLACKJACK")?;
        }
        Ok(())
    }
}
