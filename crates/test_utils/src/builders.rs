//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::PolicyId;
use domain_finance::{Expense, FinanceSnapshot, Frequency, IncomeSource, LoanFacts};
use domain_insurance::{InsuranceError, PolicyCoverageState};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::IdFixtures;

/// Builder for coverage states
pub struct CoverageStateBuilder {
    policy_id: PolicyId,
    deductible: Decimal,
    deductible_met: Decimal,
    out_of_pocket_max: Decimal,
    out_of_pocket_current: Decimal,
    coverage_percentage: Decimal,
}

impl Default for CoverageStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverageStateBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            policy_id: IdFixtures::policy_id(),
            deductible: dec!(1000),
            deductible_met: Decimal::ZERO,
            out_of_pocket_max: dec!(5000),
            out_of_pocket_current: Decimal::ZERO,
            coverage_percentage: dec!(80),
        }
    }

    /// Sets the policy ID
    pub fn with_policy_id(mut self, id: PolicyId) -> Self {
        self.policy_id = id;
        self
    }

    /// Sets the annual deductible
    pub fn with_deductible(mut self, deductible: Decimal) -> Self {
        self.deductible = deductible;
        self
    }

    /// Sets how much of the deductible is met
    pub fn with_deductible_met(mut self, met: Decimal) -> Self {
        self.deductible_met = met;
        self
    }

    /// Sets the out-of-pocket maximum
    pub fn with_out_of_pocket_max(mut self, max: Decimal) -> Self {
        self.out_of_pocket_max = max;
        self
    }

    /// Sets out-of-pocket spending so far
    pub fn with_out_of_pocket_current(mut self, current: Decimal) -> Self {
        self.out_of_pocket_current = current;
        self
    }

    /// Sets the coverage percentage (80 for 80%)
    pub fn with_coverage_percentage(mut self, percentage: Decimal) -> Self {
        self.coverage_percentage = percentage;
        self
    }

    /// Builds the state, returning validation errors
    pub fn try_build(self) -> Result<PolicyCoverageState, InsuranceError> {
        PolicyCoverageState::with_progress(
            self.policy_id,
            self.deductible,
            self.deductible_met,
            self.out_of_pocket_max,
            self.out_of_pocket_current,
            self.coverage_percentage,
        )
    }

    /// Builds the state
    ///
    /// # Panics
    ///
    /// Panics if the configured values are invalid
    pub fn build(self) -> PolicyCoverageState {
        self.try_build().expect("CoverageStateBuilder produced an invalid state")
    }
}

/// Ledger entries for one user
#[derive(Debug, Clone, Default)]
pub struct TestLedger {
    pub incomes: Vec<IncomeSource>,
    pub expenses: Vec<Expense>,
    pub loans: Vec<LoanFacts>,
}

impl TestLedger {
    /// Aggregates the ledger into a snapshot
    pub fn snapshot(&self) -> FinanceSnapshot {
        FinanceSnapshot::from_ledger(&self.incomes, &self.expenses, &self.loans)
    }
}

/// Builder for finance ledgers
#[derive(Default)]
pub struct FinanceLedgerBuilder {
    ledger: TestLedger,
}

impl FinanceLedgerBuilder {
    /// Creates an empty ledger builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an active income source
    pub fn with_income(mut self, amount: Decimal, frequency: Frequency) -> Self {
        self.ledger
            .incomes
            .push(IncomeSource::new("Salary", amount, frequency));
        self
    }

    /// Adds an income source that no longer pays
    pub fn with_inactive_income(mut self, amount: Decimal, frequency: Frequency) -> Self {
        let mut income = IncomeSource::new("Former job", amount, frequency);
        income.is_active = false;
        self.ledger.incomes.push(income);
        self
    }

    /// Adds an expense
    pub fn with_expense(mut self, category: &str, amount: Decimal, frequency: Frequency) -> Self {
        self.ledger
            .expenses
            .push(Expense::new(category, amount, frequency));
        self
    }

    /// Adds a loan
    pub fn with_loan(mut self, loan: LoanFacts) -> Self {
        self.ledger.loans.push(loan);
        self
    }

    /// Builds the ledger
    pub fn build(self) -> TestLedger {
        self.ledger
    }
}
