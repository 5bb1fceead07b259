//! Financial health classification
//!
//! Maps a [`FinanceSnapshot`] to a health tier and an affordability ceiling.
//!
//! # Rule order
//!
//! Rules are evaluated top to bottom and the first match wins. The order is
//! part of the contract: a snapshot that trips a Poor rule is Poor even if it
//! would also meet the Excellent targets.
//!
//! ```text
//! 1. DTI > poor limit                           -> Poor
//! 2. disposable income < 0                      -> Poor
//! 3. income, DTI, savings, disposable all zero  -> Poor
//! 4. DTI > fair limit                           -> Fair
//! 5. savings rate < fair floor                  -> Fair
//! 6. DTI <= excellent limit and
//!    savings rate >= excellent floor            -> Excellent
//! 7. otherwise                                  -> Good
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::CoreError;

use crate::snapshot::FinanceSnapshot;

/// Financial health tiers, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthTier {
    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            HealthTier::Excellent => "Excellent",
            HealthTier::Good => "Good",
            HealthTier::Fair => "Fair",
            HealthTier::Poor => "Poor",
        }
    }
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The rule that decided a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierReason {
    DebtToIncomeAbovePoorLimit,
    NegativeDisposableIncome,
    ZeroIncome,
    DebtToIncomeAboveFairLimit,
    SavingsRateBelowFairFloor,
    MeetsExcellentTargets,
    NoRuleMatched,
}

impl TierReason {
    /// Returns the tier this rule assigns
    pub fn tier(&self) -> HealthTier {
        match self {
            TierReason::DebtToIncomeAbovePoorLimit
            | TierReason::NegativeDisposableIncome
            | TierReason::ZeroIncome => HealthTier::Poor,
            TierReason::DebtToIncomeAboveFairLimit
            | TierReason::SavingsRateBelowFairFloor => HealthTier::Fair,
            TierReason::MeetsExcellentTargets => HealthTier::Excellent,
            TierReason::NoRuleMatched => HealthTier::Good,
        }
    }
}

/// Multipliers applied to disposable income to get the affordability ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffordabilityMultipliers {
    /// DTI at or below the fair limit
    pub comfortable: Decimal,
    /// DTI above the fair limit, at or below the poor limit
    pub stretched: Decimal,
    /// DTI above the poor limit
    pub overextended: Decimal,
}

impl Default for AffordabilityMultipliers {
    fn default() -> Self {
        Self {
            comfortable: dec!(3),
            stretched: dec!(2),
            overextended: dec!(0.5),
        }
    }
}

/// Threshold table for the classification rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierThresholds {
    /// DTI above this is Poor
    pub poor_debt_to_income: Decimal,
    /// DTI above this is Fair
    pub fair_debt_to_income: Decimal,
    /// DTI at or below this can be Excellent
    pub excellent_debt_to_income: Decimal,
    /// Savings rate below this is Fair
    pub fair_savings_rate: Decimal,
    /// Savings rate at or above this can be Excellent
    pub excellent_savings_rate: Decimal,
    pub affordability: AffordabilityMultipliers,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            poor_debt_to_income: dec!(0.50),
            fair_debt_to_income: dec!(0.36),
            excellent_debt_to_income: dec!(0.28),
            fair_savings_rate: dec!(0.10),
            excellent_savings_rate: dec!(0.20),
            affordability: AffordabilityMultipliers::default(),
        }
    }
}

impl ClassifierThresholds {
    /// Checks that the thresholds describe a coherent rule ladder
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` if DTI limits are not ordered
    /// excellent <= fair <= poor, savings floors are not ordered
    /// fair <= excellent, any ratio lies outside [0, 1], or a multiplier
    /// is negative.
    pub fn validate(&self) -> Result<(), CoreError> {
        let unit = |name: &str, value: Decimal| {
            if value < Decimal::ZERO || value > Decimal::ONE {
                Err(CoreError::configuration(format!("{} must be within [0, 1], got {}", name, value)))
            } else {
                Ok(())
            }
        };

        unit("poor_debt_to_income", self.poor_debt_to_income)?;
        unit("fair_debt_to_income", self.fair_debt_to_income)?;
        unit("excellent_debt_to_income", self.excellent_debt_to_income)?;
        unit("fair_savings_rate", self.fair_savings_rate)?;
        unit("excellent_savings_rate", self.excellent_savings_rate)?;

        if !(self.excellent_debt_to_income <= self.fair_debt_to_income
            && self.fair_debt_to_income <= self.poor_debt_to_income)
        {
            return Err(CoreError::configuration(
                "debt-to-income limits must satisfy excellent <= fair <= poor",
            ));
        }

        if self.fair_savings_rate > self.excellent_savings_rate {
            return Err(CoreError::configuration(
                "fair savings floor must not exceed excellent savings floor",
            ));
        }

        let multipliers = &self.affordability;
        if [multipliers.comfortable, multipliers.stretched, multipliers.overextended]
            .iter()
            .any(|m| *m < Decimal::ZERO)
        {
            return Err(CoreError::configuration("affordability multipliers must be non-negative"));
        }

        Ok(())
    }
}

/// Result of classifying a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialHealth {
    pub tier: HealthTier,
    pub reason: TierReason,
    /// Zero when income is zero
    pub debt_to_income_ratio: Decimal,
    /// Zero when income is zero
    pub savings_rate: Decimal,
    pub disposable_income: Decimal,
    /// Recommended maximum discretionary purchase
    pub affordability_ceiling: Decimal,
}

/// Classifies snapshots against a threshold table
#[derive(Debug, Clone, Default)]
pub struct HealthClassifier {
    thresholds: ClassifierThresholds,
}

impl HealthClassifier {
    /// Creates a classifier with the given thresholds
    pub fn new(thresholds: ClassifierThresholds) -> Self {
        Self { thresholds }
    }

    /// Returns the thresholds in use
    pub fn thresholds(&self) -> &ClassifierThresholds {
        &self.thresholds
    }

    /// Classifies a snapshot
    pub fn classify(&self, snapshot: &FinanceSnapshot) -> FinancialHealth {
        let debt_to_income_ratio = snapshot.debt_to_income_ratio().unwrap_or(Decimal::ZERO);
        let savings_rate = snapshot.savings_rate().unwrap_or(Decimal::ZERO);
        let disposable_income = snapshot.disposable_income();

        let reason = self.decide(
            snapshot.monthly_income,
            debt_to_income_ratio,
            savings_rate,
            disposable_income,
        );
        let affordability_ceiling = self.affordability_ceiling(debt_to_income_ratio, disposable_income);

        tracing::debug!(
            tier = %reason.tier(),
            ?reason,
            %debt_to_income_ratio,
            %savings_rate,
            %disposable_income,
            %affordability_ceiling,
            "Classified financial health"
        );

        FinancialHealth {
            tier: reason.tier(),
            reason,
            debt_to_income_ratio,
            savings_rate,
            disposable_income,
            affordability_ceiling,
        }
    }

    /// Recommended maximum discretionary purchase for a DTI band
    ///
    /// Zero whenever disposable income is not positive.
    pub fn affordability_ceiling(&self, debt_to_income_ratio: Decimal, disposable_income: Decimal) -> Decimal {
        if disposable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let t = &self.thresholds;
        let multiplier = if debt_to_income_ratio <= t.fair_debt_to_income {
            t.affordability.comfortable
        } else if debt_to_income_ratio <= t.poor_debt_to_income {
            t.affordability.stretched
        } else {
            t.affordability.overextended
        };

        disposable_income * multiplier
    }

    fn decide(
        &self,
        income: Decimal,
        debt_to_income_ratio: Decimal,
        savings_rate: Decimal,
        disposable_income: Decimal,
    ) -> TierReason {
        let t = &self.thresholds;

        if debt_to_income_ratio > t.poor_debt_to_income {
            TierReason::DebtToIncomeAbovePoorLimit
        } else if disposable_income < Decimal::ZERO {
            TierReason::NegativeDisposableIncome
        } else if income.is_zero()
            && debt_to_income_ratio.is_zero()
            && savings_rate.is_zero()
            && disposable_income.is_zero()
        {
            TierReason::ZeroIncome
        } else if debt_to_income_ratio > t.fair_debt_to_income {
            TierReason::DebtToIncomeAboveFairLimit
        } else if savings_rate < t.fair_savings_rate {
            TierReason::SavingsRateBelowFairFloor
        } else if debt_to_income_ratio <= t.excellent_debt_to_income
            && savings_rate >= t.excellent_savings_rate
        {
            TierReason::MeetsExcellentTargets
        } else {
            TierReason::NoRuleMatched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(income: Decimal, expenses: Decimal, loans: Decimal) -> FinancialHealth {
        HealthClassifier::default().classify(&FinanceSnapshot::new(income, expenses, loans))
    }

    #[test]
    fn test_excellent() {
        let health = classify(dec!(10000), dec!(5000), dec!(2000));
        assert_eq!(health.tier, HealthTier::Excellent);
        assert_eq!(health.affordability_ceiling, dec!(9000));
    }

    #[test]
    fn test_good_when_savings_between_floors() {
        let health = classify(dec!(10000), dec!(6500), dec!(2000));
        assert_eq!(health.savings_rate, dec!(0.15));
        assert_eq!(health.tier, HealthTier::Good);
        assert_eq!(health.reason, TierReason::NoRuleMatched);
    }

    #[test]
    fn test_zero_income_is_poor() {
        let health = classify(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
        assert_eq!(health.tier, HealthTier::Poor);
        assert_eq!(health.reason, TierReason::ZeroIncome);
        assert_eq!(health.affordability_ceiling, Decimal::ZERO);
    }

    #[test]
    fn test_poor_dti_wins_over_everything() {
        let health = classify(dec!(10000), Decimal::ZERO, dec!(5100));
        assert_eq!(health.tier, HealthTier::Poor);
        assert_eq!(health.reason, TierReason::DebtToIncomeAbovePoorLimit);
        assert_eq!(health.affordability_ceiling, dec!(2450));
    }

    #[test]
    fn test_invalid_threshold_order_rejected() {
        let thresholds = ClassifierThresholds {
            fair_debt_to_income: dec!(0.60),
            ..ClassifierThresholds::default()
        };
        assert!(thresholds.validate().is_err());
        assert!(ClassifierThresholds::default().validate().is_ok());
    }
}
