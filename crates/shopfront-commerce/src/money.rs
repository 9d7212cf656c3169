//! Money type for representing prices and totals.
//!
//! Uses a cents-based integer representation so that summing line totals
//! never accumulates floating-point error. The storefront only sells in US
//! dollars.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// A monetary amount in US dollars.
///
/// Amounts are stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use shopfront_commerce::money::Money;
    /// let price = Money::from_decimal(19.99);
    /// assert_eq!(price.amount_cents, 1999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("${}", self.display_amount())
    }

    /// Format without the currency symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Multiply by a quantity, saturating instead of overflowing.
    pub fn times(&self, quantity: u32) -> Money {
        Money::new(self.amount_cents.saturating_mul(i64::from(quantity)))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
