//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A register total that must be "rounded to 2 decimals after every      │
//! │  mutation" would need a round() call after each += and -=.             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every amount IS a whole number of cents, so the total can never     │
//! │    drift off the 2-decimal grid.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//! let doubled = price.checked_mul(2).unwrap(); // $21.98
//! assert_eq!(doubled.cents(), 2198);
//!
//! // Decimal input is converted once, at the boundary.
//! let parsed = Money::try_from_decimal(10.99).unwrap();
//! assert_eq!(parsed, price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Neg, Sub, SubAssign};

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: discount records store a negative amount
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// price ──► price × quantity ──► line total ──► register total
///                                                    │
///                                     total × discount% ──► discount amount
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount (e.g. `4.99`) to cents.
    ///
    /// Rounds to the nearest cent, halves away from zero. NaN, infinities and
    /// amounts outside the `i64` cent range are rejected.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::try_from_decimal(0.5).unwrap().cents(), 50);
    /// assert_eq!(Money::try_from_decimal(0.125).unwrap().cents(), 13);
    /// assert!(Money::try_from_decimal(f64::NAN).is_err());
    /// ```
    pub fn try_from_decimal(amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: "must be a finite number".to_string(),
            });
        }

        let cents = (amount * 100.0).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return Err(ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: "amount is too large".to_string(),
            });
        }

        Ok(Money(cents as i64))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.checked_mul(3).unwrap().cents(), 897);
    /// assert!(Money::from_cents(i64::MAX).checked_mul(2).is_none());
    /// ```
    #[inline]
    pub const fn checked_mul(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Returns `percent`% of this amount, rounded to the nearest cent.
    ///
    /// Halves round away from zero: `(amount × percent + 50) / 100` for
    /// non-negative amounts.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let total = Money::from_cents(10000); // $100.00
    /// assert_eq!(total.percentage(10).cents(), 1000);
    ///
    /// // $0.05 × 10% = $0.005 → $0.01
    /// assert_eq!(Money::from_cents(5).percentage(10).cents(), 1);
    /// // $0.04 × 10% = $0.004 → $0.00
    /// assert_eq!(Money::from_cents(4).percentage(10).cents(), 0);
    /// ```
    pub fn percentage(&self, percent: u32) -> Money {
        // i128 so large totals cannot overflow mid-calculation
        let raw = self.0 as i128 * percent as i128;
        let rounded = if raw >= 0 {
            (raw + 50) / 100
        } else {
            (raw - 50) / 100
        };
        Money(rounded as i64)
    }

    /// Renders the amount the way the register announces totals.
    ///
    /// Whole amounts drop the fraction, anything else shows two digits.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(9000).compact(), "$90");
    /// assert_eq!(Money::from_cents(9050).compact(), "$90.50");
    /// assert_eq!(Money::from_cents(7).compact(), "$0.07");
    /// ```
    pub fn compact(&self) -> String {
        if self.0 % 100 == 0 {
            let sign = if self.0 < 0 { "-" } else { "" };
            format!("{}${}", sign, self.dollars().abs())
        } else {
            self.to_string()
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money as `$12.34` / `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Negation, used for the signed amount of discount records.
impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_compact() {
        assert_eq!(Money::from_cents(9000).compact(), "$90");
        assert_eq!(Money::from_cents(0).compact(), "$0");
        assert_eq!(Money::from_cents(8910).compact(), "$89.10");
        assert_eq!(Money::from_cents(-500).compact(), "-$5");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b).unwrap().cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!(a.checked_mul(3).unwrap().cents(), 3000);
        assert_eq!((-b).cents(), -500);

        let mut c = a;
        c -= b;
        assert_eq!(c, b);
    }

    #[test]
    fn test_checked_overflow() {
        let half = Money::from_cents(i64::MAX / 2 + 1);
        assert!(half.checked_mul(2).is_none());
        assert!(half.checked_add(half).is_none());
        assert_eq!(half.checked_mul(1), Some(half));
        assert_eq!(Money::zero().checked_mul(i64::MAX), Some(Money::zero()));
    }

    #[test]
    fn test_try_from_decimal() {
        assert_eq!(Money::try_from_decimal(0.0).unwrap(), Money::zero());
        assert_eq!(Money::try_from_decimal(1.1).unwrap().cents(), 110);
        assert_eq!(Money::try_from_decimal(19.999).unwrap().cents(), 2000);
        assert_eq!(Money::try_from_decimal(-3.5).unwrap().cents(), -350);

        assert!(Money::try_from_decimal(f64::NAN).is_err());
        assert!(Money::try_from_decimal(f64::INFINITY).is_err());
        assert!(Money::try_from_decimal(1e300).is_err());
    }

    #[test]
    fn test_percentage_rounding() {
        // $100.00 at 10% = $10.00
        assert_eq!(Money::from_cents(10000).percentage(10).cents(), 1000);
        // $9.99 at 15% = $1.4985 → $1.50
        assert_eq!(Money::from_cents(999).percentage(15).cents(), 150);
        // $0.01 at 20% = $0.002 → $0.00
        assert_eq!(Money::from_cents(1).percentage(20).cents(), 0);
        assert_eq!(Money::from_cents(10000).percentage(100).cents(), 10000);
        assert_eq!(Money::from_cents(10000).percentage(0).cents(), 0);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert!(!negative.is_positive());
    }
}
