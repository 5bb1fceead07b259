//! Insurance domain errors

use thiserror::Error;

/// Errors that can occur in the insurance domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InsuranceError {
    /// Coverage state breaks one of its invariants
    #[error("Invalid policy state: {0}")]
    InvalidPolicyState(String),

    #[error("Invalid expense: {0}")]
    InvalidExpense(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl InsuranceError {
    pub fn invalid_state(message: impl Into<String>) -> Self {
        InsuranceError::InvalidPolicyState(message.into())
    }
}
