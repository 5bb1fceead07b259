//! Health-Finance Calculation Engine
//!
//! Facade over the finance, health and insurance domains. Callers load
//! entities from storage, hand them to [`HealthFinanceEngine`], and persist
//! whatever comes back; the engine performs no I/O of its own.
//!
//! # Example
//!
//! ```rust,ignore
//! use health_finance::{EngineConfig, HealthFinanceEngine};
//!
//! let config = EngineConfig::load()?;
//! health_finance::telemetry::init_tracing(&config.logging)?;
//!
//! let engine = HealthFinanceEngine::new(&config)?;
//! let assessment = engine.assess_finances(&incomes, &expenses, &loans);
//! let decision = engine.evaluate_purchase(dec!(2500), &assessment.snapshot, &conditions)?;
//! ```

pub mod config;
pub mod decision;
pub mod engine;
pub mod error;
pub mod telemetry;

pub use config::{EngineConfig, LoggingConfig};
pub use decision::{HealthFinanceReport, PurchaseDecision};
pub use engine::{FinancialAssessment, HealthFinanceEngine};
pub use error::EngineError;
