//! The dealer's draw pile.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// A single 52-card deck drawn from the top.
///
/// The top of the deck is the end of the underlying vector, so the last card
/// placed is the first one drawn.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, shuffled deck using the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }

    /// Creates a deck that yields `draws` in order, first element first.
    ///
    /// The deck keeps a seeded RNG so that [`Deck::reset`] still produces a
    /// full shuffled deck afterwards.
    #[must_use]
    pub fn from_draws(draws: &[Card], seed: u64) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generates every suit and rank pair once.
    fn fresh_cards(cards: &mut Vec<Card>) {
        cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Swaps every position, in order, with a uniformly chosen position.
    fn shuffle(&mut self) {
        let len = self.cards.len();
        for i in 0..len {
            let j = self.rng.random_range(0..len);
            self.cards.swap(i, j);
        }
    }

    /// Discards the remaining cards and regenerates a shuffled 52-card deck.
    pub fn reset(&mut self) {
        Self::fresh_cards(&mut self.cards);
        self.shuffle();
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] when no cards are left.
    pub fn draw_top(&mut self) -> Result<Card, DrawError> {
        let Some(card) = self.cards.pop() else {
            warn!("deck exhausted");
            return Err(DrawError::DeckExhausted);
        };
        debug!(%card, remaining = self.cards.len(), "card drawn");
        Ok(card)
    }

    /// Returns the cards still in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
