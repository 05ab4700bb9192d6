//! Hand representation shared by players and the dealer.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};
use crate::options::BlackjackRule;

/// Points added when an Ace is counted as 11 instead of 1.
pub const ACE_BONUS: u8 = 10;

/// Hand values above this are bust.
pub const BUST_THRESHOLD: u8 = 21;

/// An ordered set of cards with a running point value.
///
/// Aces always enter the hand at 1 point. Counting an Ace as 11 is an explicit
/// step ([`Hand::upgrade_ace_value`]), so the value is not recomputed from the
/// cards: every upgrade adds another 10 points, whether or not an earlier one
/// already covered the same Ace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Running point value.
    value: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            value: 0,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.value = self.value.saturating_add(card.value());
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current point value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether any card in the hand has the given rank.
    #[must_use]
    pub fn has_rank(&self, rank: Rank) -> bool {
        self.cards.iter().any(|card| card.rank == rank)
    }

    /// Returns whether the hand holds an Ace.
    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.has_rank(Rank::Ace)
    }

    /// Counts one Ace as 11 by adding 10 points.
    ///
    /// The caller is responsible for checking that an Ace is present.
    pub const fn upgrade_ace_value(&mut self) {
        self.value = self.value.saturating_add(ACE_BONUS);
    }

    /// Returns whether the hand is a blackjack: exactly two cards, one Ace and
    /// one ten-value card as defined by `rule`.
    ///
    /// This does not change the hand value; see
    /// [`Hand::apply_blackjack_ace_bonus`].
    #[must_use]
    pub fn is_blackjack(&self, rule: BlackjackRule) -> bool {
        let has_ten = match rule {
            BlackjackRule::AnyTenValue => self.cards.iter().any(|card| card.rank.is_ten_value()),
            BlackjackRule::JackOnly => self.has_rank(Rank::Jack),
        };
        self.cards.len() == 2 && self.has_ace() && has_ten
    }

    /// Raises a blackjack hand to 21 by counting its Ace as 11.
    ///
    /// Call once per round, after [`Hand::is_blackjack`] returned `true`.
    pub const fn apply_blackjack_ace_bonus(&mut self) {
        self.upgrade_ace_value();
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.value > BUST_THRESHOLD
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.value = 0;
    }

    /// Returns a view that renders only the cards.
    #[must_use]
    pub fn cards_display(&self) -> CardsDisplay<'_> {
        CardsDisplay(&self.cards)
    }
}

/// Renders a run of cards without the hand value.
#[derive(Debug, Clone, Copy)]
pub struct CardsDisplay<'a>(&'a [Card]);

impl fmt::Display for CardsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.0 {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Value is {}", self.cards_display(), self.value)
    }
}
