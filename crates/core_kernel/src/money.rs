//! Decimal helpers for monetary arithmetic
//!
//! Every monetary figure in the engine is a `rust_decimal::Decimal`. Amounts
//! keep their full precision while they accumulate; rounding to two places
//! only happens at display boundaries through [`round_display`].

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places used when presenting amounts and ratios
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Rounds a value to two places for presentation (half away from zero)
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a value at zero from below
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Divides `numerator` by `denominator`, returning `None` when the
/// denominator is zero
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        None
    } else {
        numerator.checked_div(denominator)
    }
}

/// Represents a percentage rate (e.g., coinsurance share, interest rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.05 for 5%)
    value: Decimal,
}

impl Rate {
    /// A rate of zero
    pub const ZERO: Rate = Rate { value: Decimal::ZERO };

    /// Creates a rate from a decimal value (e.g., 0.05 for 5%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 5.0 for 5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Applies this rate to an amount
    pub fn apply(&self, amount: Decimal) -> Decimal {
        amount * self.value
    }
}

impl Default for Rate {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4).normalize())
    }
}
