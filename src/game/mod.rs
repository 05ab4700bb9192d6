//! Round orchestration.

use alloc::vec::Vec;

use tracing::info;

use crate::deck::Deck;
use crate::dealer::Dealer;
use crate::error::{CleanupError, SeatError};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::CleanupReport;
use crate::table::Table;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

/// A blackjack table that runs rounds from betting to cleanup.
///
/// The game owns the dealer (and with it the deck), the seated players, and
/// the turn cursor. A round goes through:
///
/// 1. [`Game::start_betting`] and [`Game::bet`] for every seated player,
/// 2. [`Game::deal`],
/// 3. [`Game::act`] for the current player until every turn is over,
/// 4. [`Game::dealer_play`],
/// 5. [`Game::showdown`],
/// 6. [`Game::cleanup`].
///
/// Running out of cards surfaces as a `Draw` error from the step that needed
/// the card; it cannot be recovered and should end the session.
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    state: GameState,
    dealer: Dealer,
    table: Table,
    /// Seat whose turn it is during [`GameState::PlayerTurn`].
    current_seat: usize,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Seating);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let dealer = Dealer::new(seed);
        let table = Table::new(&options);

        Self {
            options,
            state: GameState::Seating,
            dealer,
            table,
            current_seat: 0,
        }
    }

    /// Seats `count` new players.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the players do not fit.
    pub fn seat_players(&mut self, count: usize) -> Result<(), SeatError> {
        if self.state.is_in_round() {
            return Err(SeatError::InvalidState);
        }

        self.table.add_bulk(count)?;
        if self.state == GameState::Finished {
            self.state = GameState::Seating;
        }
        Ok(())
    }

    /// Replaces the dealer's deck, for example to stage a known card order.
    pub fn set_deck(&mut self, deck: Deck) {
        self.dealer.set_deck(deck);
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the table.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the player with the given index.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.table.find(index)
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.dealer.cards_remaining()
    }

    /// Returns whether nobody is left at the table.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == GameState::Finished
    }

    /// Closes a settled round.
    ///
    /// Players who asked to leave are removed first, then players who can no
    /// longer cover the minimum bet. The dealer gets a fresh shuffled deck and
    /// every remaining player is reset. The game moves back to betting, or to
    /// [`GameState::Finished`] if the table is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been settled.
    pub fn cleanup(&mut self) -> Result<CleanupReport, CleanupError> {
        if self.state != GameState::Settled {
            return Err(CleanupError::InvalidState);
        }

        let left: Vec<usize> = self
            .table
            .remove_where(Player::has_left)
            .iter()
            .map(Player::index)
            .collect();
        for &index in &left {
            info!(player = index, "player left the table");
        }

        let broke: Vec<usize> = self
            .table
            .remove_where(Player::is_broke)
            .iter()
            .map(Player::index)
            .collect();
        for &index in &broke {
            info!(player = index, "player removed below the minimum bet");
        }

        self.dealer.reset();
        for player in self.table.iter_mut() {
            player.reset();
        }
        self.current_seat = 0;

        let table_empty = self.table.is_empty();
        self.state = if table_empty {
            info!("table is empty");
            GameState::Finished
        } else {
            GameState::Betting
        };

        Ok(CleanupReport {
            left,
            broke,
            table_empty,
        })
    }
}
