//! # Money Module
//!
//! Provides the `Money` type used to *display* monetary values.
//!
//! ## Display Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHERE ROUNDING HAPPENS                                                 │
//! │                                                                         │
//! │  Product.price (f64) ──► CartItem.line_total (f64) ──► total (f64)     │
//! │                                                      │                  │
//! │                       full precision, never rounded  │                  │
//! │                                                      ▼                  │
//! │                                     Money::from_decimal(total)          │
//! │                                     rounded to cents, shown as "$25.50" │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog delivers prices as decimals, so cart arithmetic stays in
//! `f64` and only the final figure shown to the user is converted here.
//!
//! ## Usage
//! ```rust
//! use shopvibe_core::money::Money;
//!
//! let total = Money::from_decimal(25.499);
//! assert_eq!(total.cents(), 2550);
//! assert_eq!(total.to_string(), "$25.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Rounds a decimal amount to the nearest cent (half away from zero).
    ///
    /// Non-finite input yields zero.
    ///
    /// ## Example
    /// ```rust
    /// use shopvibe_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(109.95).cents(), 10995);
    /// assert_eq!(Money::from_decimal(0.005).cents(), 1);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money::zero();
        }
        Money((amount * 100.0).round() as i64)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Whole dollars, without sign.
    const fn dollars_abs(&self) -> i64 {
        (self.0 / 100).abs()
    }

    /// Cents within the dollar (always 0-99).
    const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars_abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_split() {
        let money = Money::from_decimal(10.99);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars_abs(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_decimal_rounds() {
        assert_eq!(Money::from_decimal(25.5).cents(), 2550);
        assert_eq!(Money::from_decimal(7.954).cents(), 795);
        assert_eq!(Money::from_decimal(7.955001).cents(), 796);
        assert_eq!(Money::from_decimal(0.0).cents(), 0);
    }

    #[test]
    fn test_from_decimal_non_finite_is_zero() {
        assert_eq!(Money::from_decimal(f64::NAN), Money::zero());
        assert_eq!(Money::from_decimal(f64::INFINITY), Money::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_decimal(10.99).to_string(), "$10.99");
        assert_eq!(Money::from_decimal(5.0).to_string(), "$5.00");
        assert_eq!(Money::from_decimal(-5.5).to_string(), "-$5.50");
        assert_eq!(Money::default().to_string(), "$0.00");
    }
}
