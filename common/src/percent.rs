//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::Money;

/// Floating-point percentage.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("{_0}%")]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided values is
    /// greater than `0` and less than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            Some(Self(val))
        }
    }

    /// Calculates which [`Percent`] of the `whole` the `part` is, rounded to
    /// a whole percent.
    ///
    /// [`None`] is returned if the `whole` is zero or the `part` exceeds it.
    #[must_use]
    pub fn of(part: Money, whole: Money) -> Option<Self> {
        if whole == Money::ZERO {
            return None;
        }
        let ratio = Decimal::from(part.minor()) * Decimal::ONE_HUNDRED
            / Decimal::from(whole.minor());
        Self::new(ratio.round_dp_with_strategy(
            0,
            RoundingStrategy::MidpointAwayFromZero,
        ))
    }

    /// Returns the value of this [`Percent`].
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_suffix('%').unwrap_or(s);
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use crate::Money;

    use super::Percent;

    #[test]
    fn of() {
        assert_eq!(
            Percent::of(Money::from_minor(20_000), Money::from_minor(189_900))
                .unwrap()
                .value(),
            Decimal::from(11),
        );
        assert_eq!(
            Percent::of(Money::from_minor(50), Money::from_minor(100))
                .unwrap()
                .to_string(),
            "50%",
        );

        assert!(Percent::of(Money::from_minor(1), Money::ZERO).is_none());
        assert!(
            Percent::of(Money::from_minor(101), Money::from_minor(100))
                .is_none(),
        );
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Percent::from_str("15%").unwrap().value(),
            Decimal::from(15),
        );
        assert!(Percent::from_str("12.5").is_ok());

        assert!(Percent::from_str("-1").is_err());
        assert!(Percent::from_str("101").is_err());
        assert!(Percent::from_str("abc").is_err());
    }
}
