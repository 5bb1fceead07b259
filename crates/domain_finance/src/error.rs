//! Finance domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::CoreError;

/// Errors that can occur in the finance domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinanceError {
    /// A required quantity was zero, negative or out of range
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The payment never amortizes the balance
    #[error("Payment {payment} does not cover monthly interest of {interest}")]
    InsufficientPayment {
        payment: Decimal,
        interest: Decimal,
    },

    /// Numeric failure while computing a projection
    #[error("Calculation error: {0}")]
    Calculation(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl FinanceError {
    /// Creates an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        FinanceError::InvalidInput(message.into())
    }
}
