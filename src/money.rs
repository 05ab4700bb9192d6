//! Exact money amounts.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, SubAssign};

const CENTS_PER_DOLLAR: u64 = 100;

/// An amount of money, counted in cents.
///
/// Bets are placed in whole dollars, so every payout and surrender at the
/// table (multiples of one half) stays exact.
///
/// ```
/// use bjtable::{Money, Ratio};
///
/// let bet = Money::from_dollars(25);
/// assert_eq!(bet.to_string(), "25");
/// assert_eq!(bet.scale(Ratio::new(3, 2)).to_string(), "37.5");
/// assert_eq!(Money::from_cents(1_225).to_string(), "12.25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(u64);

/// A fraction applied to a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    numer: u64,
    denom: u64,
}

impl Ratio {
    /// Creates `numer / denom`.
    #[must_use]
    pub const fn new(numer: u64, denom: u64) -> Self {
        Self { numer, denom }
    }
}

impl Money {
    /// No money.
    pub const ZERO: Self = Self(0);

    /// Creates an amount of whole dollars.
    #[must_use]
    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars.saturating_mul(CENTS_PER_DOLLAR))
    }

    /// Creates an amount from cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Returns whether the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiplies the amount by `ratio`. Fractions of a cent are dropped.
    #[must_use]
    pub const fn scale(self, ratio: Ratio) -> Self {
        Self(self.0.saturating_mul(ratio.numer) / ratio.denom)
    }

    /// Subtracts `other`, stopping at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Difference `self - other` in cents, negative when `other` is larger.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "table amounts fit in i64")]
    pub const fn signed_diff(self, other: Self) -> i64 {
        self.0 as i64 - other.0 as i64
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = self.saturating_sub(other);
    }
}

impl Mul<u64> for Money {
    type Output = Self;

    fn mul(self, factor: u64) -> Self {
        Self(self.0.saturating_mul(factor))
    }
}

impl MulAssign<u64> for Money {
    fn mul_assign(&mut self, factor: u64) {
        *self = *self * factor;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = self.0 / CENTS_PER_DOLLAR;
        let cents = self.0 % CENTS_PER_DOLLAR;
        if cents == 0 {
            write!(f, "{dollars}")
        } else if cents % 10 == 0 {
            write!(f, "{dollars}.{}", cents / 10)
        } else {
            write!(f, "{dollars}.{cents:02}")
        }
    }
}
