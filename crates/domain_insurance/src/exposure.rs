//! Annual cost exposure of a health plan
//!
//! Premiums are certain; deductible and out-of-pocket spending depend on
//! how much care is used. The projection brackets the year's cost between
//! "no claims" and "out-of-pocket maximum reached".

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_finance::frequency::{Frequency, MONTHS_PER_YEAR};

use crate::coverage::PolicyCoverageState;
use crate::error::InsuranceError;

/// Projected cost of a policy over the rest of its year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualCostExposure {
    pub annual_premium: Decimal,
    pub remaining_deductible: Decimal,
    pub remaining_out_of_pocket: Decimal,
    /// Premiums only
    pub best_case_total: Decimal,
    /// Premiums plus the rest of the deductible, the floor once any claim lands
    pub deductible_case_total: Decimal,
    /// Premiums plus the remaining out-of-pocket maximum
    pub worst_case_total: Decimal,
}

impl AnnualCostExposure {
    /// Projects exposure from a premium and the current coverage state
    ///
    /// # Errors
    ///
    /// Returns `InsuranceError::InvalidInput` for a negative premium.
    pub fn project(
        premium: Decimal,
        frequency: Frequency,
        state: &PolicyCoverageState,
    ) -> Result<Self, InsuranceError> {
        if premium < Decimal::ZERO {
            return Err(InsuranceError::InvalidInput(format!(
                "premium must not be negative, got {}",
                premium
            )));
        }

        let annual_premium = premium * frequency.occurrences_per_year();
        let remaining_deductible = state.remaining_deductible();
        let remaining_out_of_pocket = state.remaining_out_of_pocket();

        Ok(Self {
            annual_premium,
            remaining_deductible,
            remaining_out_of_pocket,
            best_case_total: annual_premium,
            deductible_case_total: annual_premium + remaining_deductible.min(remaining_out_of_pocket),
            worst_case_total: annual_premium + remaining_out_of_pocket,
        })
    }

    /// Worst-case cost spread over twelve months
    pub fn worst_case_monthly(&self) -> Decimal {
        self.worst_case_total / MONTHS_PER_YEAR
    }
}
