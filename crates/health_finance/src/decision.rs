//! Purchase decisions combining financial health and health risk

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ratio, CoreError};
use domain_finance::{FinancialHealth, HealthTier};
use domain_health::{RiskAssessment, RiskLevel};

/// Financial health and health risk for one user, side by side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthFinanceReport {
    pub health: FinancialHealth,
    pub risk: RiskAssessment,
}

impl HealthFinanceReport {
    /// Largest purchase price that stays within the ceiling once risk is applied
    pub fn risk_adjusted_ceiling(&self) -> Decimal {
        ratio(self.health.affordability_ceiling, self.risk.purchase_multiplier).unwrap_or(Decimal::ZERO)
    }

    /// Ceiling lost to health risk
    pub fn risk_drag(&self) -> Decimal {
        self.health.affordability_ceiling - self.risk_adjusted_ceiling()
    }
}

/// Outcome of checking one discretionary purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseDecision {
    pub price: Decimal,
    /// Price scaled by the risk multiplier
    pub risk_adjusted_price: Decimal,
    pub affordability_ceiling: Decimal,
    /// Ceiling minus risk-adjusted price; negative when unaffordable
    pub headroom: Decimal,
    pub tier: HealthTier,
    pub risk_level: RiskLevel,
    pub affordable: bool,
}

impl PurchaseDecision {
    /// Decides a purchase against a report
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a negative price.
    pub fn evaluate(price: Decimal, report: &HealthFinanceReport) -> Result<Self, CoreError> {
        if price < Decimal::ZERO {
            return Err(CoreError::validation(format!(
                "purchase price must not be negative, got {}",
                price
            )));
        }

        let risk_adjusted_price = price * report.risk.purchase_multiplier;
        let affordability_ceiling = report.health.affordability_ceiling;

        Ok(Self {
            price,
            risk_adjusted_price,
            affordability_ceiling,
            headroom: affordability_ceiling - risk_adjusted_price,
            tier: report.health.tier,
            risk_level: report.risk.level,
            affordable: risk_adjusted_price <= affordability_ceiling,
        })
    }
}
