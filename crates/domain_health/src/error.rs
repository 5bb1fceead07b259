//! Health domain errors

use thiserror::Error;

/// Errors that can occur in the health domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HealthError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
