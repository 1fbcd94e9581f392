//! Token amount type for the balance credential.
//!
//! Amounts are raw integer units (u128); the engine never deals in decimals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

/// A quantity of the balance token, in raw units.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TokenAmount(u128);

impl TokenAmount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// `floor(self * percent / 100)`, exact for every u128 without overflow.
    ///
    /// Splits `self` into hundreds and remainder so the multiplication by a
    /// percentage (at most 100) never exceeds the input magnitude.
    pub fn percent(self, percent: u8) -> Self {
        let p = u128::from(percent);
        Self((self.0 / 100) * p + (self.0 % 100) * p / 100)
    }
}

impl Sum for TokenAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| Self(acc.0.saturating_add(x.0)))
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
