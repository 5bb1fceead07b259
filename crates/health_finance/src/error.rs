//! Engine error type

use thiserror::Error;

use core_kernel::CoreError;
use domain_finance::FinanceError;
use domain_health::HealthError;
use domain_insurance::InsuranceError;

/// Errors surfaced by the engine facade
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Finance(#[from] FinanceError),

    #[error(transparent)]
    Health(#[from] HealthError),

    #[error(transparent)]
    Insurance(#[from] InsuranceError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<config::ConfigError> for EngineError {
    fn from(err: config::ConfigError) -> Self {
        EngineError::Configuration(err.to_string())
    }
}
