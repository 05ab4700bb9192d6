//! Player and table tests.

use bjtable::{
    ActionEvent, BetError, BlackjackRule, Card, DrawError, GameOptions, Money, Player, Rank,
    SeatError, Suit, Table,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

const fn dollars(amount: u64) -> Money {
    Money::from_dollars(amount)
}

fn player_with(cash: u64, bet: u64) -> Player {
    let mut player = Player::new(1, dollars(cash), dollars(25)).unwrap();
    player.place_bet(bet).unwrap();
    player
}

#[test]
fn player_index_must_be_positive() {
    assert_eq!(
        Player::new(0, dollars(250), dollars(25)).unwrap_err(),
        SeatError::InvalidIndex
    );

    let player = Player::new(3, dollars(250), dollars(25)).unwrap();
    assert_eq!(player.index(), 3);
    assert_eq!(player.cash(), dollars(250));
    assert_eq!(player.bet(), Money::ZERO);
    assert!(player.is_participating());
}

#[test]
fn bet_must_be_between_minimum_and_cash() {
    let mut player = Player::new(1, dollars(100), dollars(25)).unwrap();
    let expected = BetError::OutOfRange {
        min: dollars(25),
        max: dollars(100),
    };

    assert_eq!(player.place_bet(24).unwrap_err(), expected);
    assert_eq!(player.place_bet(101).unwrap_err(), expected);
    assert_eq!(player.bet(), Money::ZERO);
    assert_eq!(
        expected.to_string(),
        "invalid bet: it must be greater or equal to 25 and less or equal to 100"
    );

    player.place_bet(25).unwrap();
    player.place_bet(100).unwrap();
    assert_eq!(player.bet(), dollars(100));
}

#[test]
fn hit_to_bust_ends_the_turn() {
    let mut player = player_with(250, 25);
    player.receive(card(Suit::Heart, Rank::Ten));
    player.receive(card(Suit::Spade, Rank::Ten));

    let outcome = player.hit(card(Suit::Club, Rank::Five));
    assert!(matches!(outcome.event, ActionEvent::Busted { .. }));
    assert!(player.has_busted());
    assert!(!player.is_participating());
    assert_eq!(outcome.to_string(), "PLAYER #1 RECEIVED A |♣ 5| AND BUSTED");
}

#[test]
fn double_down_without_cash_is_rejected() {
    let mut player = player_with(30, 25);
    player.receive(card(Suit::Heart, Rank::Five));
    player.receive(card(Suit::Spade, Rank::Six));

    let mut drew = false;
    let outcome = player
        .double_down(|| {
            drew = true;
            Ok(card(Suit::Club, Rank::Ten))
        })
        .unwrap();

    assert_eq!(
        outcome.event,
        ActionEvent::DoubleDownRejected {
            needed: dollars(50),
            cash: dollars(30)
        }
    );
    assert!(outcome.is_rejection());
    assert!(!drew);
    assert_eq!(player.bet(), dollars(25));
    assert_eq!(player.hand().len(), 2);
    assert!(player.is_participating());
    assert_eq!(player.last_action(), Some(&outcome));
}

#[test]
fn double_down_doubles_bet_and_ends_turn() {
    let mut player = player_with(100, 25);
    player.receive(card(Suit::Heart, Rank::Five));
    player.receive(card(Suit::Spade, Rank::Six));

    let outcome = player
        .double_down(|| Ok(card(Suit::Club, Rank::Ten)))
        .unwrap();
    assert_eq!(
        outcome.event,
        ActionEvent::DoubledDown {
            card: card(Suit::Club, Rank::Ten),
            bet: dollars(50)
        }
    );
    assert_eq!(player.value(), 21);
    assert!(!player.is_participating());
}

#[test]
fn double_down_passes_draw_errors_through() {
    let mut player = player_with(100, 25);
    let err = player
        .double_down(|| Err(DrawError::DeckExhausted))
        .unwrap_err();
    assert_eq!(err, DrawError::DeckExhausted);
    assert_eq!(player.bet(), dollars(25));
}

#[test]
fn surrender_halves_the_bet_exactly() {
    let mut player = player_with(250, 25);
    let outcome = player.surrender();
    assert_eq!(
        outcome.event,
        ActionEvent::Surrendered {
            bet: Money::from_cents(1_250)
        }
    );
    assert!(player.has_surrendered());
    assert!(!player.is_participating());
    assert_eq!(
        outcome.to_string(),
        "PLAYER #1 SURRENDERED, 12.5$ OF THEIR BET IS STILL LOST"
    );

    assert_eq!(player.lose(), Money::from_cents(1_250));
    assert_eq!(player.cash(), Money::from_cents(23_750));
}

#[test]
fn insurance_needs_a_dealer_ace() {
    let mut player = player_with(250, 25);

    let rejected = player.insure(9);
    assert_eq!(
        rejected.event,
        ActionEvent::InsuranceRejected { dealer_value: 9 }
    );
    assert!(!player.is_insured());

    let accepted = player.insure(11);
    assert_eq!(accepted.event, ActionEvent::Insured);
    assert!(player.is_insured());
    assert!(player.is_participating());
}

#[test]
fn ace_upgrade_needs_an_ace_and_can_repeat() {
    let mut player = player_with(250, 25);
    player.receive(card(Suit::Heart, Rank::Six));
    assert_eq!(
        player.make_ace_eleven().event,
        ActionEvent::AceUpgradeRejected
    );
    assert_eq!(player.value(), 6);

    player.receive(card(Suit::Heart, Rank::Ace));
    assert_eq!(
        player.make_ace_eleven().event,
        ActionEvent::AceUpgraded { value: 17 }
    );
    assert_eq!(
        player.make_ace_eleven().event,
        ActionEvent::AceUpgraded { value: 27 }
    );
    assert!(player.has_busted());
    assert!(player.is_participating());
    assert_eq!(
        player.to_string(),
        "Player 1 ~ Bet: 25$\n|♥ 6||♥ A| Value is 27 BUSTED"
    );
}

#[test]
fn leave_is_only_recorded_once() {
    let mut player = player_with(250, 25);
    assert_eq!(player.leave().event, ActionEvent::Leaving);
    assert_eq!(player.leave().event, ActionEvent::AlreadyLeaving);
    assert!(player.has_left());
    assert!(player.is_participating());
}

#[test]
fn blackjack_check_applies_bonus_once() {
    let mut player = player_with(250, 25);
    player.receive(card(Suit::Heart, Rank::Ace));
    player.receive(card(Suit::Spade, Rank::Queen));

    let outcome = player.check_blackjack(BlackjackRule::AnyTenValue);
    assert_eq!(outcome.map(|o| o.event), Some(ActionEvent::Blackjack));
    assert_eq!(player.value(), 21);
    assert!(player.has_blackjack());
    assert!(!player.is_participating());
}

#[test]
fn payouts_follow_multipliers() {
    let mut winner = player_with(250, 40);
    assert_eq!(winner.win(), dollars(80));
    assert_eq!(winner.cash(), dollars(330));
    assert_eq!(winner.profit(), dollars(80));

    let mut natural = player_with(250, 25);
    assert_eq!(natural.win_blackjack(), Money::from_cents(3_750));
    assert_eq!(natural.cash(), Money::from_cents(28_750));
    assert_eq!(natural.cash().to_string(), "287.5");

    let mut loser = player_with(250, 100);
    assert_eq!(loser.lose(), dollars(100));
    assert_eq!(loser.cash(), dollars(150));
    assert_eq!(loser.profit(), Money::ZERO);
}

#[test]
fn broke_below_minimum_bet() {
    assert!(
        Player::new(1, Money::from_cents(2_450), dollars(25))
            .unwrap()
            .is_broke()
    );
    assert!(!Player::new(1, dollars(25), dollars(25)).unwrap().is_broke());
}

#[test]
fn reset_clears_round_state() {
    let mut player = player_with(250, 25);
    player.receive(card(Suit::Heart, Rank::Ten));
    player.leave();
    player.insure(11);
    player.stand();

    player.reset();
    assert_eq!(player.bet(), Money::ZERO);
    assert!(player.hand().is_empty());
    assert!(player.is_participating());
    assert!(!player.has_left());
    assert!(!player.is_insured());
    assert!(player.last_action().is_none());
    assert_eq!(player.cash(), dollars(250));
}

#[test]
fn player_rendering_shows_qualifiers() {
    let mut player = player_with(250, 25);
    player.receive(card(Suit::Heart, Rank::Ten));
    player.receive(card(Suit::Spade, Rank::Ten));
    player.leave();
    player.hit(card(Suit::Club, Rank::Two));

    assert_eq!(
        player.to_string(),
        "Player 1 ~ Bet: 25$\n|♥ 10||♠ 10||♣ 2| Value is 22 WILL LEAVE NEXT ROUND BUSTED"
    );
}

#[test]
fn table_rejects_more_players_than_seats() {
    let mut table = Table::new(&GameOptions::default());

    assert_eq!(
        table.add_bulk(5).unwrap_err(),
        SeatError::InvalidPlayerCount {
            requested: 5,
            available: 4
        }
    );
    assert_eq!(
        table.add_bulk(0).unwrap_err(),
        SeatError::InvalidPlayerCount {
            requested: 0,
            available: 4
        }
    );
    assert!(table.is_empty());

    table.add_bulk(3).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.available_seats(), 1);
    assert!(table.add_bulk(2).is_err());
    assert_eq!(table.len(), 3);
}

#[test]
fn table_keeps_indices_after_removal() {
    let mut table = Table::new(&GameOptions::default());
    table.add_bulk(3).unwrap();

    let removed = table.remove(1).unwrap();
    assert_eq!(removed.index(), 2);

    let indices: Vec<usize> = table.iter().map(Player::index).collect();
    assert_eq!(indices, vec![1, 3]);
    assert_eq!(table.seat_of(3), Some(1));
    assert!(table.find(2).is_none());

    table.add_bulk(2).unwrap();
    let indices: Vec<usize> = table.iter().map(Player::index).collect();
    assert_eq!(indices, vec![1, 3, 4, 5]);
}

#[test]
fn removing_a_missing_seat_is_fatal() {
    let mut table = Table::new(&GameOptions::default());
    table.add_bulk(1).unwrap();

    let err = table.remove(1).unwrap_err();
    assert_eq!(err, SeatError::SeatNotFound { seat: 1 });
    assert!(err.is_fatal());
    assert!(table.get(4).is_err());
}

#[test]
fn table_rendering_separates_players() {
    let mut table = Table::new(&GameOptions::default());
    table.add_bulk(2).unwrap();
    assert_eq!(
        table.to_string(),
        "Player 1 ~ Bet: 0$\n Value is 0\n\nPlayer 2 ~ Bet: 0$\n Value is 0"
    );
}
