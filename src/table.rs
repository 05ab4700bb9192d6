//! Seating: an ordered, bounded set of players.

use alloc::vec::Vec;
use core::fmt;

use tracing::info;

use crate::error::SeatError;
use crate::money::Money;
use crate::options::GameOptions;
use crate::player::Player;

/// The players seated at the table, in turn order.
///
/// Player indices are handed out once and never reused or renumbered: when a
/// player leaves, the players behind them move up a seat but keep their index.
#[derive(Debug, Clone)]
pub struct Table {
    players: Vec<Player>,
    capacity: usize,
    next_index: usize,
    starting_cash: Money,
    min_bet: Money,
}

impl Table {
    /// Creates an empty table using the capacity and money settings in `options`.
    #[must_use]
    pub fn new(options: &GameOptions) -> Self {
        Self {
            players: Vec::with_capacity(options.max_players),
            capacity: options.max_players,
            next_index: 1,
            starting_cash: options.starting_cash,
            min_bet: options.min_bet,
        }
    }

    /// Seats `count` new players at the end of the table.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::InvalidPlayerCount`] if `count` is 0 or more than
    /// the free seats. The table is left unchanged.
    pub fn add_bulk(&mut self, count: usize) -> Result<(), SeatError> {
        let available = self.available_seats();
        if count == 0 || count > available {
            return Err(SeatError::InvalidPlayerCount {
                requested: count,
                available,
            });
        }

        for _ in 0..count {
            let player = Player::new(self.next_index, self.starting_cash, self.min_bet)?;
            self.players.push(player);
            self.next_index += 1;
        }

        info!(count, seated = self.players.len(), "players seated");
        Ok(())
    }

    /// Removes and returns the player at `seat`, shifting later players up.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::SeatNotFound`] if nobody sits at `seat`.
    pub fn remove(&mut self, seat: usize) -> Result<Player, SeatError> {
        if seat >= self.players.len() {
            return Err(SeatError::SeatNotFound { seat });
        }
        Ok(self.players.remove(seat))
    }

    /// Removes every player matching `predicate`, keeping seat order for the rest.
    ///
    /// Returns the removed players in their former seat order.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> Vec<Player>
    where
        F: FnMut(&Player) -> bool,
    {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.players.len());
        for player in self.players.drain(..) {
            if predicate(&player) {
                removed.push(player);
            } else {
                kept.push(player);
            }
        }
        self.players = kept;
        removed
    }

    /// Returns the player at `seat`.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::SeatNotFound`] if nobody sits at `seat`.
    pub fn get(&self, seat: usize) -> Result<&Player, SeatError> {
        self.players.get(seat).ok_or(SeatError::SeatNotFound { seat })
    }

    /// Returns the player at `seat` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::SeatNotFound`] if nobody sits at `seat`.
    pub fn get_mut(&mut self, seat: usize) -> Result<&mut Player, SeatError> {
        self.players
            .get_mut(seat)
            .ok_or(SeatError::SeatNotFound { seat })
    }

    /// Returns the seat of the player with the given index.
    #[must_use]
    pub fn seat_of(&self, index: usize) -> Option<usize> {
        self.players.iter().position(|player| player.index() == index)
    }

    /// Returns the player with the given index.
    #[must_use]
    pub fn find(&self, index: usize) -> Option<&Player> {
        self.players.iter().find(|player| player.index() == index)
    }

    /// Returns the player with the given index mutably.
    pub fn find_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.index() == index)
    }

    /// Returns the seated players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Iterates over the seated players in seat order.
    pub fn iter(&self) -> core::slice::Iter<'_, Player> {
        self.players.iter()
    }

    /// Iterates mutably over the seated players in seat order.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Player> {
        self.players.iter_mut()
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns the maximum number of players.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of free seats.
    #[must_use]
    pub fn available_seats(&self) -> usize {
        self.capacity.saturating_sub(self.players.len())
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Player;
    type IntoIter = core::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (seat, player) in self.players.iter().enumerate() {
            if seat > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{player}")?;
        }
        Ok(())
    }
}
