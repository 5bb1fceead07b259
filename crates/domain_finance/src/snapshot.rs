//! Monthly finance snapshots
//!
//! A `FinanceSnapshot` is the monthly aggregate of a user's ledger. The
//! derived ratios live here so the classifier and the engine facade read
//! the same numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ratio, ExpenseId, IncomeId};

use crate::frequency::{normalize_to_monthly, Frequency};
use crate::loan::LoanFacts;

/// A recorded source of income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: IncomeId,
    /// Payer or description
    pub source: String,
    pub amount: Decimal,
    pub frequency: Frequency,
    /// Inactive sources are excluded from aggregation
    pub is_active: bool,
}

impl IncomeSource {
    /// Creates an active income source
    pub fn new(source: impl Into<String>, amount: Decimal, frequency: Frequency) -> Self {
        Self {
            id: IncomeId::new_v7(),
            source: source.into(),
            amount,
            frequency,
            is_active: true,
        }
    }

    /// Returns the monthly-equivalent amount, or zero when inactive
    pub fn monthly_amount(&self) -> Decimal {
        if self.is_active {
            normalize_to_monthly(self.amount, self.frequency)
        } else {
            Decimal::ZERO
        }
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub category: String,
    pub amount: Decimal,
    pub frequency: Frequency,
}

impl Expense {
    /// Creates an expense
    pub fn new(category: impl Into<String>, amount: Decimal, frequency: Frequency) -> Self {
        Self {
            id: ExpenseId::new_v7(),
            category: category.into(),
            amount,
            frequency,
        }
    }

    /// Returns the monthly-equivalent amount
    pub fn monthly_amount(&self) -> Decimal {
        normalize_to_monthly(self.amount, self.frequency)
    }
}

/// Monthly income, expense and debt-service figures
///
/// Inputs are expected to be non-negative; negative values are a caller
/// error and are not corrected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FinanceSnapshot {
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    pub monthly_loan_payments: Decimal,
}

impl FinanceSnapshot {
    /// Creates a snapshot from monthly figures
    pub fn new(monthly_income: Decimal, monthly_expenses: Decimal, monthly_loan_payments: Decimal) -> Self {
        Self {
            monthly_income,
            monthly_expenses,
            monthly_loan_payments,
        }
    }

    /// Aggregates ledger entries into a snapshot
    ///
    /// Incomes and expenses are normalized to monthly amounts. Loans
    /// contribute their monthly payment only while a balance remains.
    pub fn from_ledger(incomes: &[IncomeSource], expenses: &[Expense], loans: &[LoanFacts]) -> Self {
        let monthly_income = incomes.iter().map(IncomeSource::monthly_amount).sum();
        let monthly_expenses = expenses.iter().map(Expense::monthly_amount).sum();
        let monthly_loan_payments = loans
            .iter()
            .filter(|loan| loan.remaining_balance > Decimal::ZERO)
            .map(|loan| loan.monthly_payment)
            .sum();

        Self::new(monthly_income, monthly_expenses, monthly_loan_payments)
    }

    /// Income minus expenses minus loan payments
    pub fn disposable_income(&self) -> Decimal {
        self.monthly_income - self.monthly_expenses - self.monthly_loan_payments
    }

    /// Loan payments divided by income; `None` when income is zero
    pub fn debt_to_income_ratio(&self) -> Option<Decimal> {
        ratio(self.monthly_loan_payments, self.monthly_income)
    }

    /// Disposable income divided by income; `None` when income is zero
    pub fn savings_rate(&self) -> Option<Decimal> {
        ratio(self.disposable_income(), self.monthly_income)
    }

    /// Returns true when there is no income to measure against
    pub fn has_zero_income(&self) -> bool {
        self.monthly_income.is_zero()
    }
}
