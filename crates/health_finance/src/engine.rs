//! Engine facade
//!
//! `HealthFinanceEngine` holds only configuration, so one instance can be
//! shared across threads. Coverage state is passed in and handed back; the
//! caller persists it and must not allocate two expenses against the same
//! policy concurrently.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use domain_finance::{
    amortize, Expense, FinanceSnapshot, FinancialHealth, Frequency, HealthClassifier, IncomeSource,
    LoanFacts, LoanProjection,
};
use domain_health::{Bmi, MedicalCondition, RiskAggregator, RiskAssessment};
use domain_insurance::{
    allocate, allocate_sequence, AllocationLedger, AnnualCostExposure, CoverageAllocation,
    PolicyCoverageState,
};

use crate::config::EngineConfig;
use crate::decision::{HealthFinanceReport, PurchaseDecision};
use crate::error::EngineError;

/// Snapshot built from ledger entries together with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialAssessment {
    pub snapshot: FinanceSnapshot,
    pub health: FinancialHealth,
}

/// Stateless calculation engine
#[derive(Debug, Clone, Default)]
pub struct HealthFinanceEngine {
    classifier: HealthClassifier,
    risk: RiskAggregator,
}

impl HealthFinanceEngine {
    /// Builds an engine from validated configuration
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Core` if the thresholds are incoherent.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            classifier: HealthClassifier::new(config.classifier),
            risk: RiskAggregator::new(config.risk),
        })
    }

    /// Aggregates ledger entries and classifies the result
    pub fn assess_finances(
        &self,
        incomes: &[IncomeSource],
        expenses: &[Expense],
        loans: &[LoanFacts],
    ) -> FinancialAssessment {
        let snapshot = FinanceSnapshot::from_ledger(incomes, expenses, loans);
        FinancialAssessment {
            snapshot,
            health: self.classify(&snapshot),
        }
    }

    /// Classifies an already aggregated snapshot
    pub fn classify(&self, snapshot: &FinanceSnapshot) -> FinancialHealth {
        self.classifier.classify(snapshot)
    }

    pub fn assess_risk(&self, conditions: &[MedicalCondition]) -> RiskAssessment {
        self.risk.assess(conditions)
    }

    /// Body-mass index from height in centimetres and weight in kilograms
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Health` for non-positive or unusable inputs.
    pub fn bmi(&self, height_cm: Decimal, weight_kg: Decimal) -> Result<Bmi, EngineError> {
        Ok(Bmi::calculate(height_cm, weight_kg)?)
    }

    /// Financial health and health risk side by side
    pub fn report(&self, snapshot: &FinanceSnapshot, conditions: &[MedicalCondition]) -> HealthFinanceReport {
        HealthFinanceReport {
            health: self.classify(snapshot),
            risk: self.assess_risk(conditions),
        }
    }

    /// Checks whether a discretionary purchase fits the affordability ceiling
    /// once health risk is applied
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Core` for a negative price.
    #[instrument(skip(self, snapshot, conditions), fields(conditions = conditions.len()))]
    pub fn evaluate_purchase(
        &self,
        price: Decimal,
        snapshot: &FinanceSnapshot,
        conditions: &[MedicalCondition],
    ) -> Result<PurchaseDecision, EngineError> {
        let report = self.report(snapshot, conditions);
        let decision = PurchaseDecision::evaluate(price, &report)?;

        tracing::debug!(
            risk_adjusted_price = %decision.risk_adjusted_price,
            affordability_ceiling = %decision.affordability_ceiling,
            affordable = decision.affordable,
            "Evaluated purchase"
        );
        Ok(decision)
    }

    /// Splits one expense; persist `next_state` before the next call
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Insurance` for a negative expense or a corrupted
    /// state.
    #[instrument(skip(self, state), fields(policy_id = %state.policy_id()))]
    pub fn allocate_expense(
        &self,
        state: &PolicyCoverageState,
        expense_amount: Decimal,
    ) -> Result<CoverageAllocation, EngineError> {
        Ok(allocate(state, expense_amount)?)
    }

    /// Splits a run of expenses against one policy in order
    ///
    /// # Errors
    ///
    /// Fails on the first rejected expense.
    #[instrument(skip(self, state, expenses), fields(policy_id = %state.policy_id(), expenses = expenses.len()))]
    pub fn allocate_expenses(
        &self,
        state: &PolicyCoverageState,
        expenses: &[Decimal],
    ) -> Result<AllocationLedger, EngineError> {
        Ok(allocate_sequence(state, expenses)?)
    }

    /// Projects a loan's payoff from `as_of`
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Finance` for invalid loan facts or a payment
    /// that does not cover interest.
    pub fn project_loan(&self, loan: &LoanFacts, as_of: NaiveDate) -> Result<LoanProjection, EngineError> {
        Ok(amortize(loan, as_of)?)
    }

    /// Projects several loans, skipping none
    ///
    /// # Errors
    ///
    /// Fails on the first loan that cannot be projected.
    pub fn project_loans(&self, loans: &[LoanFacts], as_of: NaiveDate) -> Result<Vec<LoanProjection>, EngineError> {
        loans.iter().map(|loan| self.project_loan(loan, as_of)).collect()
    }

    /// Brackets a policy's remaining annual cost
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Insurance` for a negative premium.
    pub fn project_exposure(
        &self,
        premium: Decimal,
        frequency: Frequency,
        state: &PolicyCoverageState,
    ) -> Result<AnnualCostExposure, EngineError> {
        Ok(AnnualCostExposure::project(premium, frequency, state)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_is_shareable() {
        assert_send_sync::<HealthFinanceEngine>();
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = EngineConfig::default();
        config.classifier.fair_debt_to_income = rust_decimal_macros::dec!(0.9);

        assert!(matches!(HealthFinanceEngine::new(&config), Err(EngineError::Core(_))));
    }
}
