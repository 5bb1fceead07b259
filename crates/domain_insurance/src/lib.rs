//! Health Insurance Domain
//!
//! Apportions medical expenses between insurer and patient and tracks a
//! policy's progress toward its deductible and out-of-pocket maximum.
//!
//! # Allocation
//!
//! ```text
//! expense
//!   |-- deductible portion ------------------------------> patient
//!   `-- remainder --+-- coverage %  ---------------------> insurer
//!                   `-- (100 - coverage) % --------------> patient
//!                                                            |
//!            patient total capped at remaining OOP; excess --> insurer
//! ```
//!
//! Coverage state is a value: each allocation takes the previous
//! `PolicyCoverageState` and returns the next one. The caller persists it
//! and must serialize allocations per policy.

pub mod coverage;
pub mod allocation;
pub mod exposure;
pub mod error;

pub use coverage::PolicyCoverageState;
pub use allocation::{allocate, allocate_sequence, AllocationLedger, CoverageAllocation};
pub use exposure::AnnualCostExposure;
pub use error::InsuranceError;
