use tracing::{debug, info};

use crate::action::{Action, ActionOutcome};
use crate::error::ActionError;
use crate::player::Player;

use super::{Game, GameState};

impl Game {
    /// Returns the player whose turn it is.
    ///
    /// Returns `None` outside of [`GameState::PlayerTurn`].
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        if self.state != GameState::PlayerTurn {
            return None;
        }
        self.table.get(self.current_seat).ok()
    }

    /// Performs `action` for the player with the given index.
    ///
    /// Rule rejections (doubling down without the cash, insuring when the
    /// dealer shows no Ace, upgrading a missing Ace, leaving twice, unknown
    /// codes) come back as an [`ActionOutcome`] and leave the player's state
    /// untouched. The turn passes to the next seat once the player stands,
    /// doubles down, surrenders or busts.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the player
    /// cannot be found, it is not the player's turn, or the deck runs out.
    pub fn act(&mut self, index: usize, action: Action) -> Result<ActionOutcome, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let seat = self
            .table
            .seat_of(index)
            .ok_or(ActionError::PlayerNotFound)?;
        if seat != self.current_seat {
            return Err(ActionError::NotYourTurn);
        }

        let dealer_value = self.dealer.value();
        let player = self
            .table
            .get_mut(seat)
            .map_err(|_| ActionError::PlayerNotFound)?;

        let outcome = match action {
            Action::Hit => player.hit(self.dealer.deal()?),
            Action::Stand => player.stand(),
            Action::DoubleDown => player.double_down(|| self.dealer.deal())?,
            Action::Surrender => player.surrender(),
            Action::Insure => player.insure(dealer_value),
            Action::MakeAceEleven => player.make_ace_eleven(),
            Action::Leave => player.leave(),
            Action::Invalid(code) => player.reject_invalid(code),
        };
        let turn_over = !player.is_participating();

        debug!(player = index, action = %action.code(), %outcome, "action played");

        if turn_over {
            self.current_seat += 1;
            self.skip_finished_seats();
        }

        Ok(outcome)
    }

    /// Moves the cursor to the next seat that still has decisions to make,
    /// handing over to the dealer when there is none.
    pub(super) fn skip_finished_seats(&mut self) {
        while self
            .table
            .get(self.current_seat)
            .is_ok_and(|player| !player.is_participating())
        {
            self.current_seat += 1;
        }

        if self.current_seat >= self.table.len() {
            info!("all players done, dealer's turn");
            self.state = GameState::DealerTurn;
        }
    }
}
