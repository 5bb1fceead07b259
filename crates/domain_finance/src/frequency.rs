//! Payment frequencies and monthly normalization
//!
//! Incomes and expenses are recorded at whatever cadence they occur. The
//! engine reasons in monthly figures, so every amount passes through
//! [`normalize_to_monthly`] first.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weeks in a calendar year
pub const WEEKS_PER_YEAR: Decimal = dec!(52);
/// Days in a calendar year, averaged over leap years
pub const DAYS_PER_YEAR: Decimal = dec!(365.25);
/// Months in a calendar year
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// How often an amount recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    /// Every two weeks
    Biweekly,
    Monthly,
    Quarterly,
    Annual,
    /// Does not recur
    OneTime,
}

impl Frequency {
    /// Parses a frequency label, case-insensitively
    ///
    /// Returns `None` for labels the engine does not know; callers that need
    /// a hard failure validate before reaching the engine.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Frequency::Daily),
            "weekly" => Some(Frequency::Weekly),
            "biweekly" | "bi-weekly" | "fortnightly" => Some(Frequency::Biweekly),
            "monthly" => Some(Frequency::Monthly),
            "quarterly" => Some(Frequency::Quarterly),
            "annual" | "annually" | "yearly" => Some(Frequency::Annual),
            "one-time" | "one_time" | "onetime" | "once" => Some(Frequency::OneTime),
            _ => None,
        }
    }

    /// Returns the canonical label
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Annual => "annual",
            Frequency::OneTime => "one-time",
        }
    }

    /// Returns the number of occurrences per year
    pub fn occurrences_per_year(&self) -> Decimal {
        match self {
            Frequency::Daily => DAYS_PER_YEAR,
            Frequency::Weekly => WEEKS_PER_YEAR,
            Frequency::Biweekly => WEEKS_PER_YEAR / dec!(2),
            Frequency::Monthly => MONTHS_PER_YEAR,
            Frequency::Quarterly => dec!(4),
            Frequency::Annual => Decimal::ONE,
            Frequency::OneTime => Decimal::ZERO,
        }
    }

    /// Returns true if the amount repeats
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Frequency::OneTime)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a periodic amount to its monthly equivalent
///
/// Non-positive amounts and one-time amounts normalize to zero so the
/// function is total over its inputs.
///
/// # Example
///
/// ```rust,ignore
/// let monthly = normalize_to_monthly(dec!(1000), Frequency::Weekly);
/// assert_eq!(monthly.round_dp(2), dec!(4333.33));
/// ```
pub fn normalize_to_monthly(amount: Decimal, frequency: Frequency) -> Decimal {
    if amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    match frequency {
        Frequency::Monthly => amount,
        Frequency::OneTime => Decimal::ZERO,
        other => match amount.checked_mul(other.occurrences_per_year()) {
            Some(annual) => annual / MONTHS_PER_YEAR,
            None => {
                tracing::warn!(%amount, frequency = %other, "Amount overflows when annualized, normalizing to zero");
                Decimal::ZERO
            }
        },
    }
}

/// Fail-soft variant of [`normalize_to_monthly`] taking a raw label
///
/// Unknown or empty labels yield zero rather than an error.
pub fn normalize_str_to_monthly(amount: Decimal, frequency: &str) -> Decimal {
    match Frequency::parse(frequency) {
        Some(parsed) => normalize_to_monthly(amount, parsed),
        None => {
            tracing::warn!(frequency, "Unrecognized frequency, normalizing to zero");
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_is_identity() {
        assert_eq!(normalize_to_monthly(dec!(2500.55), Frequency::Monthly), dec!(2500.55));
    }

    #[test]
    fn test_weekly_uses_52_weeks() {
        assert_eq!(normalize_to_monthly(dec!(120), Frequency::Weekly), dec!(520));
    }

    #[test]
    fn test_daily_uses_365_25_days() {
        assert_eq!(normalize_to_monthly(dec!(12), Frequency::Daily), dec!(365.25));
    }

    #[test]
    fn test_annual_divides_by_twelve() {
        assert_eq!(normalize_to_monthly(dec!(60000), Frequency::Annual), dec!(5000));
    }

    #[test]
    fn test_one_time_does_not_recur() {
        assert_eq!(normalize_to_monthly(dec!(10000), Frequency::OneTime), Decimal::ZERO);
    }

    #[test]
    fn test_non_positive_amounts_normalize_to_zero() {
        assert_eq!(normalize_to_monthly(dec!(-50), Frequency::Monthly), Decimal::ZERO);
        assert_eq!(normalize_to_monthly(Decimal::ZERO, Frequency::Weekly), Decimal::ZERO);
    }

    #[test]
    fn test_overflowing_amount_normalizes_to_zero() {
        assert_eq!(normalize_to_monthly(Decimal::MAX, Frequency::Daily), Decimal::ZERO);
        assert_eq!(normalize_to_monthly(Decimal::MAX, Frequency::Monthly), Decimal::MAX);
    }

    #[test]
    fn test_unknown_label_is_fail_soft() {
        assert_eq!(normalize_str_to_monthly(dec!(100), "hourly"), Decimal::ZERO);
        assert_eq!(normalize_str_to_monthly(dec!(100), ""), Decimal::ZERO);
        assert_eq!(normalize_str_to_monthly(dec!(100), "Monthly"), dec!(100));
    }

    #[test]
    fn test_parse_round_trips_canonical_labels() {
        for frequency in [
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Biweekly,
            Frequency::Monthly,
            Frequency::Quarterly,
            Frequency::Annual,
            Frequency::OneTime,
        ] {
            assert_eq!(Frequency::parse(frequency.as_str()), Some(frequency));
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn frequency_strategy() -> impl Strategy<Value = Frequency> {
        prop_oneof![
            Just(Frequency::Daily),
            Just(Frequency::Weekly),
            Just(Frequency::Biweekly),
            Just(Frequency::Monthly),
            Just(Frequency::Quarterly),
            Just(Frequency::Annual),
            Just(Frequency::OneTime),
        ]
    }

    proptest! {
        #[test]
        fn normalization_is_pure(cents in -1_000_000_000i64..1_000_000_000i64, frequency in frequency_strategy()) {
            let amount = Decimal::new(cents, 2);
            prop_assert_eq!(
                normalize_to_monthly(amount, frequency),
                normalize_to_monthly(amount, frequency)
            );
        }

        #[test]
        fn normalization_is_never_negative(cents in -1_000_000_000i64..1_000_000_000i64, frequency in frequency_strategy()) {
            prop_assert!(normalize_to_monthly(Decimal::new(cents, 2), frequency) >= Decimal::ZERO);
        }
    }
}
