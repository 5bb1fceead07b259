//! Core Kernel - Foundational types for the health-finance engine
//!
//! This crate provides the building blocks shared by every domain crate:
//! - Percentage rates and decimal helpers with explicit display rounding
//! - Calendar helpers for month-based projections
//! - Strongly-typed identifiers for ledger entities
//! - The shared core error type

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Rate, ratio, round_display, non_negative};
pub use temporal::add_months;
pub use identifiers::{
    UserId, PolicyId, LoanId, ConditionId, IncomeId, ExpenseId,
};
pub use error::CoreError;
