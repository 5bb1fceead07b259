//! Body-mass index

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::round_display;

use crate::error::HealthError;

/// WHO adult BMI categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// A body-mass index value, kept at full precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bmi {
    value: Decimal,
}

impl Bmi {
    /// Calculates BMI from height in centimetres and weight in kilograms
    ///
    /// # Errors
    ///
    /// Returns `HealthError::InvalidInput` if either input is not positive or
    /// the pair is too extreme to divide.
    pub fn calculate(height_cm: Decimal, weight_kg: Decimal) -> Result<Self, HealthError> {
        if height_cm <= Decimal::ZERO {
            return Err(HealthError::InvalidInput(format!("height must be positive, got {} cm", height_cm)));
        }
        if weight_kg <= Decimal::ZERO {
            return Err(HealthError::InvalidInput(format!("weight must be positive, got {} kg", weight_kg)));
        }

        let height_m = height_cm / dec!(100);
        let value = height_m
            .checked_mul(height_m)
            .and_then(|squared| weight_kg.checked_div(squared))
            .ok_or_else(|| {
                HealthError::InvalidInput(format!(
                    "cannot compute BMI for height {} cm and weight {} kg",
                    height_cm, weight_kg
                ))
            })?;

        Ok(Self { value })
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Value rounded to two places for display
    pub fn rounded(&self) -> Decimal {
        round_display(self.value)
    }

    pub fn category(&self) -> BmiCategory {
        if self.value < dec!(18.5) {
            BmiCategory::Underweight
        } else if self.value < dec!(25) {
            BmiCategory::Normal
        } else if self.value < dec!(30) {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_calculation() {
        let bmi = Bmi::calculate(dec!(180), dec!(81)).unwrap();
        assert_eq!(bmi.value(), dec!(25));
        assert_eq!(bmi.category(), BmiCategory::Overweight);
    }

    #[test]
    fn test_bmi_display_rounding() {
        let bmi = Bmi::calculate(dec!(175), dec!(70)).unwrap();
        assert_eq!(bmi.rounded(), dec!(22.86));
        assert_eq!(bmi.category(), BmiCategory::Normal);
    }

    #[test]
    fn test_non_positive_inputs_rejected() {
        assert!(matches!(Bmi::calculate(Decimal::ZERO, dec!(70)), Err(HealthError::InvalidInput(_))));
        assert!(matches!(Bmi::calculate(dec!(170), dec!(-1)), Err(HealthError::InvalidInput(_))));
    }

    #[test]
    fn test_vanishing_height_rejected() {
        let result = Bmi::calculate(dec!(0.00000000000001), dec!(70));
        assert!(matches!(result, Err(HealthError::InvalidInput(_))));
    }

    #[test]
    fn test_overflowing_weight_rejected() {
        let result = Bmi::calculate(dec!(1), Decimal::MAX);
        assert!(matches!(result, Err(HealthError::InvalidInput(_))));
    }
}
