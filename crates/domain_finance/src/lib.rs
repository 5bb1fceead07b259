//! Personal Finance Domain
//!
//! Turns raw ledger facts (incomes, expenses, loans) into the monthly
//! figures and derived metrics the rest of the engine consumes.
//!
//! # Flow
//!
//! ```text
//! IncomeSource / Expense / LoanFacts
//!         |  normalize_to_monthly
//!         v
//!   FinanceSnapshot --> HealthClassifier --> FinancialHealth
//!
//!   LoanFacts --> amortize --> LoanProjection
//! ```
//!
//! Every function here is pure and synchronous.

pub mod frequency;
pub mod snapshot;
pub mod classifier;
pub mod loan;
pub mod error;

pub use frequency::{Frequency, normalize_to_monthly, normalize_str_to_monthly};
pub use snapshot::{FinanceSnapshot, IncomeSource, Expense};
pub use classifier::{
    HealthClassifier, HealthTier, TierReason, FinancialHealth,
    ClassifierThresholds, AffordabilityMultipliers,
};
pub use loan::{LoanFacts, LoanProjection, amortize, months_to_payoff, minimum_amortizing_payment};
pub use error::FinanceError;
