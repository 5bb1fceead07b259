//! Tests for the decimal helpers and the Rate type
//!
//! Tests cover display rounding, zero-safe ratios, clamping and rate
//! conversions.

use core_kernel::{non_negative, ratio, round_display, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod rounding {
    use super::*;

    #[test]
    fn test_round_display_keeps_two_places() {
        assert_eq!(round_display(dec!(1234.5678)), dec!(1234.57));
    }

    #[test]
    fn test_round_display_of_repeating_fraction() {
        let third = dec!(100) / dec!(3);
        assert_eq!(round_display(third), dec!(33.33));
    }

    #[test]
    fn test_round_display_integer_unchanged() {
        assert_eq!(round_display(dec!(250)), dec!(250));
    }
}

mod ratios {
    use super::*;

    #[test]
    fn test_ratio_of_loan_payments_to_income() {
        assert_eq!(ratio(dec!(1500), dec!(5000)), Some(dec!(0.3)));
    }

    #[test]
    fn test_ratio_with_zero_income_is_none() {
        assert_eq!(ratio(dec!(1500), Decimal::ZERO), None);
    }

    #[test]
    fn test_non_negative_clamps() {
        assert_eq!(non_negative(dec!(-0.01)), Decimal::ZERO);
        assert_eq!(non_negative(dec!(12.5)), dec!(12.5));
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_from_percentage_round_trips() {
        let rate = Rate::from_percentage(dec!(70));
        assert_eq!(rate.as_percentage(), dec!(70));
        assert_eq!(rate.as_decimal(), dec!(0.7));
    }

    #[test]
    fn test_default_rate_is_zero() {
        assert_eq!(Rate::default(), Rate::ZERO);
        assert_eq!(Rate::ZERO.apply(dec!(1000)), Decimal::ZERO);
    }

    #[test]
    fn test_rate_serializes_as_struct() {
        let rate = Rate::new(dec!(0.8));
        let json = serde_json::to_string(&rate).unwrap();
        let back: Rate = serde_json::from_str(&json).unwrap();
        assert_eq!(rate, back);
    }
}
