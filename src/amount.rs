//! Monetary amount type backed by exact decimal arithmetic.
//!
//! Amounts keep their full precision through every calculation and are only
//! rounded to two decimal places when displayed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// A currency-agnostic amount of money.
///
/// # Examples
///
/// ```
/// use expense_ledger::Amount;
///
/// let amount = Amount::parse_positive("4.5").unwrap();
/// assert_eq!(amount.to_string(), "4.50");
/// assert_eq!(amount.display_currency(), "$4.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Decimal places used when displaying an amount.
    pub const DISPLAY_SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Parses user input, accepting only strictly positive numbers.
    ///
    /// Returns `None` for empty, non-numeric, zero or negative input, and for
    /// values beyond the `Decimal` range (about 7.9e28).
    pub fn parse_positive(s: &str) -> Option<Self> {
        let amount = Amount::from_str(s).ok()?;
        if amount.is_positive() {
            Some(amount)
        } else {
            None
        }
    }

    /// Returns the underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if this value is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Divides the amount evenly over a number of days.
    ///
    /// Returns zero when `days` is zero.
    pub fn per_day(&self, days: u32) -> Self {
        if days == 0 {
            return Amount::ZERO;
        }
        Amount(self.0 / Decimal::from(days))
    }

    /// Formats the amount as currency, e.g. `$1200.00`.
    pub fn display_currency(&self) -> String {
        format!("${}", self)
    }

    fn rounded(&self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::DISPLAY_SCALE);
        rounded
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed))?;
        Ok(Amount(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}

/// Addition saturates at `Decimal::MAX` instead of overflowing.
impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
