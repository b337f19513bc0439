//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use derive_more::{From, Into};
use rust_decimal::{prelude::ToPrimitive as _, Decimal};
use serde::{Deserialize, Serialize};

/// Number of minor units in a single major currency unit.
const MINOR_PER_MAJOR: u64 = 100;

/// Amount of money, stored in the smallest currency unit (cents).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero amount of [`Money`].
    pub const ZERO: Self = Self(0);

    /// The largest representable amount of [`Money`].
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a new [`Money`] from the provided amount of minor units.
    #[must_use]
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Returns amount of minor units in this [`Money`].
    #[must_use]
    pub const fn minor(self) -> u64 {
        self.0
    }

    /// Returns this [`Money`] expressed in major units.
    #[must_use]
    pub fn major(self) -> Decimal {
        Decimal::from(self.0) / Decimal::from(MINOR_PER_MAJOR)
    }

    /// Subtracts `rhs` from this [`Money`], returning [`None`] on underflow.
    #[must_use]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = self.0 / MINOR_PER_MAJOR;
        let minor = self.0 % MINOR_PER_MAJOR;
        write!(f, "${major}.{minor:02}")
    }
}

impl FromStr for Money {
    type Err = &'static str;

    /// Parses an amount given in major units, like `1699` or `1699.99`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('$').unwrap_or(s);
        let amount = Decimal::from_str(s).map_err(|_| "invalid amount")?;
        if amount.is_sign_negative() {
            return Err("negative amount");
        }
        if amount.normalize().scale() > 2 {
            return Err("too precise amount");
        }

        (amount * Decimal::from(MINOR_PER_MAJOR))
            .to_u64()
            .map(Self)
            .ok_or("too large amount")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Money;

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("1699").unwrap(),
            Money::from_minor(169_900),
        );
        assert_eq!(
            Money::from_str("1699.99").unwrap(),
            Money::from_minor(169_999),
        );
        assert_eq!(Money::from_str("$0.5").unwrap(), Money::from_minor(50));
        assert_eq!(Money::from_str("10.500").unwrap(), Money::from_minor(1050));

        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("abc").is_err());
        assert!(Money::from_str("-1").is_err());
        assert!(Money::from_str("1.999").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(Money::from_minor(169_900).to_string(), "$1699.00");
        assert_eq!(Money::from_minor(5).to_string(), "$0.05");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn major() {
        assert_eq!(
            Money::from_minor(189_950).major(),
            Decimal::from_str_exact("1899.5").unwrap(),
        );
    }

    #[test]
    fn deserializes_from_minor_units() {
        let money: Money = serde_json::from_str("189900").unwrap();
        assert_eq!(money, Money::from_minor(189_900));
    }
}
