//! The dealer: owner of the deck and of the house hand.

use core::fmt;

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DrawError;
use crate::hand::Hand;
use crate::options::DEALER_HITS_ON;

/// The house. Deals from its private deck to itself and to players.
#[derive(Debug, Clone)]
pub struct Dealer {
    deck: Deck,
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with a freshly shuffled deck.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_deck(Deck::new(seed))
    }

    /// Creates a dealer that draws from the given deck.
    #[must_use]
    pub const fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            hand: Hand::new(),
        }
    }

    /// Draws a card into the dealer's own hand.
    ///
    /// The dealer always counts its Aces as 11.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] when the deck is empty.
    pub fn deal_to_self(&mut self) -> Result<Card, DrawError> {
        let card = self.deck.draw_top()?;
        self.hand.add_card(card);
        if card.is_ace() {
            self.hand.upgrade_ace_value();
        }
        debug!(%card, value = self.hand.value(), "dealer took a card");
        Ok(card)
    }

    /// Draws a card for someone else.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] when the deck is empty.
    pub fn deal(&mut self) -> Result<Card, DrawError> {
        self.deck.draw_top()
    }

    /// Returns whether the dealer must draw again: the hand is worth 16 or less.
    #[must_use]
    pub const fn should_hit_again(&self) -> bool {
        self.hand.value() <= DEALER_HITS_ON
    }

    /// Returns the dealer's hand value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the dealer is bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the dealer's deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Replaces the deck, keeping the hand. Useful to stage a known card order.
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Reshuffles a brand new deck and empties the hand.
    pub fn reset(&mut self) {
        self.deck.reset();
        self.hand.clear();
    }
}

impl fmt::Display for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dealer ~ {}", self.hand)
    }
}
