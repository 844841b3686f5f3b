//! Money type for representing monetary values.
//!
//! The storefront trades in Indonesian Rupiah, which has no fractional
//! subunit in practice, so every amount is a whole number of rupiah held
//! in an `i64`. Arithmetic saturates instead of overflowing: cart totals
//! are total functions and must always produce a value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// ISO 4217 code of the only supported currency.
pub const CURRENCY_CODE: &str = "IDR";

/// Display prefix used by the `id-ID` locale.
pub const CURRENCY_SYMBOL: &str = "Rp";

/// Thousands separator used by the `id-ID` locale.
const GROUP_SEPARATOR: char = '.';

/// Denominator for basis-point rates (1 bps = 0.01%).
pub const BASIS_POINTS: i64 = 10_000;

/// A monetary amount in whole rupiah.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero rupiah.
    pub const ZERO: Money = Money(0);

    /// Create a new Money value.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The raw amount in the smallest currency unit.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add another amount, saturating at the numeric bounds.
    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn saturating_mul(self, factor: i64) -> Money {
        Money(self.0.saturating_mul(factor))
    }

    /// Apply a rate expressed in basis points.
    ///
    /// Results are rounded half-up to the nearest whole unit (half away
    /// from zero for negative amounts), so `percentage_bps(1000)` of 15
    /// is 2, and of 14 is 1.
    ///
    /// ```
    /// use menu_commerce::money::Money;
    /// assert_eq!(Money::new(103_000).percentage_bps(1_000), Money::new(10_300));
    /// assert_eq!(Money::new(15).percentage_bps(1_000), Money::new(2));
    /// ```
    pub fn percentage_bps(&self, bps: i64) -> Money {
        let product = self.0 as i128 * bps as i128;
        let denom = BASIS_POINTS as i128;
        let half = denom / 2;
        let rounded = if product >= 0 {
            (product + half) / denom
        } else {
            (product - half) / denom
        };
        Money(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Format for display in the `id-ID` locale, e.g. `Rp113.300`.
    ///
    /// ```
    /// use menu_commerce::money::Money;
    /// assert_eq!(Money::new(113_300).display(), "Rp113.300");
    /// assert_eq!(Money::new(0).display(), "Rp0");
    /// ```
    pub fn display(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}{}", sign, CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format the magnitude with grouping separators but no symbol.
    pub fn display_amount(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(GROUP_SEPARATOR);
            }
            grouped.push(ch);
        }
        grouped
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.saturating_mul(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Money(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_grouping() {
        assert_eq!(Money::new(103_000).display(), "Rp103.000");
        assert_eq!(Money::new(10_300).display(), "Rp10.300");
        assert_eq!(Money::new(999).display(), "Rp999");
        assert_eq!(Money::new(1_000).display(), "Rp1.000");
        assert_eq!(Money::new(1_234_567).display(), "Rp1.234.567");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Money::new(-1_000).display(), "-Rp1.000");
    }

    #[test]
    fn test_percentage_exact() {
        assert_eq!(Money::new(170_000).percentage_bps(1_000).amount(), 17_000);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(Money::new(15).percentage_bps(1_000).amount(), 2);
        assert_eq!(Money::new(14).percentage_bps(1_000).amount(), 1);
        assert_eq!(Money::new(5).percentage_bps(1_000).amount(), 1);
        assert_eq!(Money::new(4).percentage_bps(1_000).amount(), 0);
    }

    #[test]
    fn test_percentage_negative_rounds_away_from_zero() {
        assert_eq!(Money::new(-15).percentage_bps(1_000).amount(), -2);
    }

    #[test]
    fn test_saturating_arithmetic() {
        let max = Money::new(i64::MAX);
        assert_eq!((max + Money::new(1)).amount(), i64::MAX);
        assert_eq!((max * 2).amount(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::new(85_000), Money::new(18_000)].into_iter().sum();
        assert_eq!(total.amount(), 103_000);
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Money::new(85_000)).unwrap(), "85000");
    }
}
