//! Player action codes and the record of what each action did.

use core::fmt;

use crate::card::Card;
use crate::money::Money;

/// A decision a player can make during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current hand and end the turn.
    Stand,
    /// Double the bet, take exactly one card and end the turn.
    DoubleDown,
    /// Give up the hand; half of the bet stays at stake.
    Surrender,
    /// Insure against a dealer blackjack.
    Insure,
    /// Count an Ace as 11.
    MakeAceEleven,
    /// Leave the table once the round is over.
    Leave,
    /// Any unrecognised code.
    Invalid(char),
}

impl Action {
    /// Parses a single-character action code (`H S D X I A L`, any case).
    ///
    /// ```
    /// use bjtable::Action;
    ///
    /// assert_eq!(Action::from_code('h'), Action::Hit);
    /// assert_eq!(Action::from_code('X'), Action::Surrender);
    /// assert_eq!(Action::from_code('?'), Action::Invalid('?'));
    /// ```
    #[must_use]
    pub const fn from_code(code: char) -> Self {
        match code.to_ascii_uppercase() {
            'H' => Self::Hit,
            'S' => Self::Stand,
            'D' => Self::DoubleDown,
            'X' => Self::Surrender,
            'I' => Self::Insure,
            'A' => Self::MakeAceEleven,
            'L' => Self::Leave,
            _ => Self::Invalid(code),
        }
    }

    /// Returns the code that selects this action.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Hit => 'H',
            Self::Stand => 'S',
            Self::DoubleDown => 'D',
            Self::Surrender => 'X',
            Self::Insure => 'I',
            Self::MakeAceEleven => 'A',
            Self::Leave => 'L',
            Self::Invalid(code) => code,
        }
    }
}

/// What happened when a player acted (or was dealt a blackjack).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEvent {
    /// The opening two cards formed a blackjack.
    Blackjack,
    /// Took a card and stayed in the round.
    Hit {
        /// The card received.
        card: Card,
    },
    /// Took a card and went over 21.
    Busted {
        /// The card received.
        card: Card,
    },
    /// Ended the turn.
    Stood,
    /// Doubled the bet and took a final card.
    DoubledDown {
        /// The card received.
        card: Card,
        /// The new bet.
        bet: Money,
    },
    /// Doubling down needs more cash than the player has.
    DoubleDownRejected {
        /// Bet that doubling would require.
        needed: Money,
        /// Cash available.
        cash: Money,
    },
    /// Gave up the hand.
    Surrendered {
        /// Bet left at stake.
        bet: Money,
    },
    /// Insured against a dealer blackjack.
    Insured,
    /// The dealer is not showing a single Ace.
    InsuranceRejected {
        /// The dealer's visible value.
        dealer_value: u8,
    },
    /// Counted an Ace as 11.
    AceUpgraded {
        /// Hand value after the upgrade.
        value: u8,
    },
    /// There is no Ace in the hand.
    AceUpgradeRejected,
    /// Will leave once the round is over.
    Leaving,
    /// Asked to leave a second time this round.
    AlreadyLeaving,
    /// Unrecognised action code.
    Invalid(char),
}

impl ActionEvent {
    /// Returns whether the request was refused without changing any state.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::DoubleDownRejected { .. }
                | Self::InsuranceRejected { .. }
                | Self::AceUpgradeRejected
                | Self::AlreadyLeaving
                | Self::Invalid(_)
        )
    }
}

/// An [`ActionEvent`] attributed to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Index of the player who acted.
    pub player: usize,
    /// What happened.
    pub event: ActionEvent,
}

impl ActionOutcome {
    /// Returns whether the request was refused without changing any state.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        self.event.is_rejection()
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player = self.player;
        match self.event {
            ActionEvent::Blackjack => write!(f, "PLAYER #{player} HAS GOTTEN A BLACKJACK !"),
            ActionEvent::Hit { card } => write!(f, "PLAYER #{player} HIT AND RECEIVED A {card}"),
            ActionEvent::Busted { card } => {
                write!(f, "PLAYER #{player} RECEIVED A {card} AND BUSTED")
            }
            ActionEvent::Stood => write!(f, "PLAYER #{player} DECIDED TO SKIP THEIR TURN"),
            ActionEvent::DoubledDown { card, bet } => write!(
                f,
                "PLAYER #{player} DOUBLED THEIR BET TO {bet}$ AND RECEIVED A {card}"
            ),
            ActionEvent::DoubleDownRejected { needed, cash } => write!(
                f,
                "PLAYER #{player} ATTEMPTED TO DOUBLE DOWN, BUT {needed}$ IS MORE THAN THEIR {cash}$"
            ),
            ActionEvent::Surrendered { bet } => write!(
                f,
                "PLAYER #{player} SURRENDERED, {bet}$ OF THEIR BET IS STILL LOST"
            ),
            ActionEvent::Insured => write!(
                f,
                "PLAYER #{player} GOT INSURANCE: IF THE DEALER HAS AN ACE AND A 10 POINT CARD, THEY LOSE NOTHING"
            ),
            ActionEvent::InsuranceRejected { dealer_value } => write!(
                f,
                "PLAYER #{player} ATTEMPTED TO GET INSURANCE, BUT THE DEALER SHOWS {dealer_value} AND NOT A SINGLE ACE"
            ),
            ActionEvent::AceUpgraded { value } => write!(
                f,
                "PLAYER #{player} TURNED THEIR 1-POINT-ACE INTO AN 11-POINT-ACE AND NOW HAS A HAND VALUE OF {value}"
            ),
            ActionEvent::AceUpgradeRejected => write!(
                f,
                "PLAYER #{player} ATTEMPTED TO TURN A 1-POINT-ACE INTO AN 11-POINT-ACE, BUT THEY DO NOT HAVE AN ACE"
            ),
            ActionEvent::Leaving => write!(f, "PLAYER #{player} WILL LEAVE NEXT ROUND"),
            ActionEvent::AlreadyLeaving => write!(
                f,
                "PLAYER #{player}, YOU ARE ALREADY LEAVING, BUT FINISH THIS ROUND FIRST"
            ),
            ActionEvent::Invalid(code) => {
                write!(f, "PLAYER #{player} HAS ENTERED AN INVALID OPTION ({code})")
            }
        }
    }
}
