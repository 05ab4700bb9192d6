use alloc::vec::Vec;

use tracing::info;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::BUST_THRESHOLD;
use crate::money::Money;
use crate::player::Player;
use crate::result::{Outcome, PlayerResult, RoundResult};

use super::{Game, GameState};

/// What the dealer finished the round with.
#[derive(Debug, Clone, Copy)]
struct DealerFinal {
    value: u8,
    cards: usize,
    bust: bool,
}

impl DealerFinal {
    /// A two-card 21, the only hand insurance protects against.
    const fn is_natural(self) -> bool {
        self.value == BUST_THRESHOLD && self.cards == 2
    }
}

/// Decides how a player's round ends against the dealer's final hand.
fn judge(player: &Player, dealer: DealerFinal) -> Outcome {
    if dealer.bust {
        return if player.has_blackjack() {
            Outcome::Blackjack
        } else if player.has_surrendered() {
            Outcome::Surrendered
        } else if player.has_busted() {
            Outcome::Bust
        } else {
            Outcome::Win
        };
    }

    if player.is_insured() && !player.has_surrendered() && dealer.is_natural() {
        return Outcome::Insured;
    }

    if player.has_surrendered() {
        Outcome::Surrendered
    } else if player.has_busted() {
        Outcome::Bust
    } else if player.value() < dealer.value {
        Outcome::Lose
    } else if player.has_blackjack() {
        Outcome::Blackjack
    } else if player.value() == dealer.value {
        Outcome::Push
    } else {
        Outcome::Win
    }
}

/// Applies `outcome` to the player's cash and reports the money moved.
fn settle(player: &mut Player, outcome: Outcome) -> PlayerResult {
    let bet = player.bet();
    let (profit, loss) = match outcome {
        Outcome::Blackjack => (player.win_blackjack(), Money::ZERO),
        Outcome::Win => (player.win(), Money::ZERO),
        Outcome::Push | Outcome::Insured => {
            player.push();
            (Money::ZERO, Money::ZERO)
        }
        Outcome::Lose | Outcome::Bust | Outcome::Surrendered => (Money::ZERO, player.lose()),
    };

    PlayerResult {
        index: player.index(),
        outcome,
        bet,
        profit,
        loss,
        cash: player.cash(),
        player_value: player.value(),
    }
}

impl Game {
    /// Dealer plays their hand, drawing while the value is at or below 16.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        while self.dealer.should_hit_again() {
            drawn_cards.push(self.dealer.deal_to_self()?);
        }

        info!(
            value = self.dealer.value(),
            bust = self.dealer.is_bust(),
            drawn = drawn_cards.len(),
            "dealer done"
        );
        self.state = GameState::RoundOver;

        Ok(drawn_cards)
    }

    /// Settles every player against the dealer's final hand.
    ///
    /// If the dealer is bust, every player who neither busted nor surrendered
    /// wins (blackjacks at the blackjack rate). Otherwise each player is judged
    /// in turn:
    /// 1. an insured player facing a two-card dealer 21 loses nothing,
    /// 2. busted or surrendered hands lose,
    /// 3. a lower hand loses,
    /// 4. a blackjack wins at the blackjack rate, even against a dealer 21,
    /// 5. an equal hand pushes,
    /// 6. a higher hand wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let dealer = DealerFinal {
            value: self.dealer.value(),
            cards: self.dealer.hand().len(),
            bust: self.dealer.is_bust(),
        };

        let mut players = Vec::with_capacity(self.table.len());
        for player in self.table.iter_mut() {
            let outcome = judge(player, dealer);
            let result = settle(player, outcome);
            info!(
                player = result.index,
                ?outcome,
                profit = %result.profit,
                loss = %result.loss,
                cash = %result.cash,
                "player settled"
            );
            players.push(result);
        }

        self.state = GameState::Settled;

        Ok(RoundResult {
            players,
            dealer_value: dealer.value,
            dealer_cards: dealer.cards,
            dealer_bust: dealer.bust,
        })
    }
}
