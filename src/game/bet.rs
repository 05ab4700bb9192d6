use tracing::info;

use crate::error::{BetError, DealError};

use super::{Game, GameState};

impl Game {
    /// Starts the betting phase.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the game is over.
    pub fn start_betting(&mut self) -> Result<(), BetError> {
        match self.state {
            GameState::Seating | GameState::Betting => {
                self.state = GameState::Betting;
                Ok(())
            }
            _ => Err(BetError::InvalidState),
        }
    }

    /// Places a bet of `dollars` whole dollars for the player with the given index.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the player cannot
    /// be found, or the amount is outside `[min_bet, cash]`.
    pub fn bet(&mut self, index: usize, dollars: u64) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        let player = self
            .table
            .find_mut(index)
            .ok_or(BetError::PlayerNotFound)?;
        player.place_bet(dollars)?;

        info!(player = index, dollars, "bet placed");
        Ok(())
    }

    /// Deals the opening cards.
    ///
    /// The dealer takes one card, then each player receives two cards in seat
    /// order. Players dealt a blackjack have their Ace counted as 11 and sit
    /// out the rest of the turns.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the table is
    /// empty, a player has not placed a bet, or the deck runs out.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidState);
        }

        if self.table.is_empty() {
            return Err(DealError::NoPlayers);
        }

        if let Some(player) = self.table.iter().find(|player| player.bet().is_zero()) {
            return Err(DealError::MissingBet {
                index: player.index(),
            });
        }

        self.dealer.deal_to_self()?;
        for player in self.table.iter_mut() {
            player.receive(self.dealer.deal()?);
            player.receive(self.dealer.deal()?);
        }

        let rule = self.options.blackjack_rule;
        for player in self.table.iter_mut() {
            if player.check_blackjack(rule).is_some() {
                info!(player = player.index(), "blackjack dealt");
            }
        }

        info!(
            players = self.table.len(),
            dealer_value = self.dealer.value(),
            "opening cards dealt"
        );

        self.current_seat = 0;
        self.state = GameState::PlayerTurn;
        self.skip_finished_seats();

        Ok(())
    }
}
