//! Health Domain
//!
//! Converts medical facts into numbers the finance side can use:
//! - **Conditions**: category and severity of each recorded condition
//! - **Risk**: weighted risk score, coarse risk level and purchase multiplier
//! - **Vitals**: body-mass index with input validation
//!
//! # Risk Scoring
//!
//! ```text
//! contribution = severity points x category multiplier   (0 if inactive or preventive)
//! total        = sum of contributions
//! level        = Low (<=25) | Moderate (<=50) | High (<=75) | Critical
//! ```

pub mod condition;
pub mod risk;
pub mod vitals;
pub mod error;

pub use condition::{ConditionCategory, MedicalCondition, Severity};
pub use risk::{RiskAggregator, RiskAssessment, RiskContribution, RiskLevel, RiskLevelBands, risk_contribution_for_labels};
pub use vitals::{Bmi, BmiCategory};
pub use error::HealthError;
