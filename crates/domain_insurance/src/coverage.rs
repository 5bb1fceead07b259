//! Policy coverage state
//!
//! Tracks where a policy stands within its current period: how much of the
//! deductible has been met and how much the patient has paid toward the
//! out-of-pocket maximum.
//!
//! # Single writer
//!
//! Allocation reads the cumulative counters and returns advanced ones. Two
//! allocations against the same policy must not interleave; the owning
//! service holds a per-policy lock or uses a transactional update around
//! each call. The state itself enforces no locking.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{non_negative, PolicyId, Rate};

use crate::error::InsuranceError;

/// Deductible and out-of-pocket progress for one policy period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyCoverageState {
    policy_id: PolicyId,
    deductible: Decimal,
    deductible_met: Decimal,
    out_of_pocket_max: Decimal,
    out_of_pocket_current: Decimal,
    /// Coinsurance share paid by the insurer, 0 to 100
    coverage_percentage: Decimal,
}

impl PolicyCoverageState {
    /// Creates the state at the start of a policy period
    ///
    /// # Errors
    ///
    /// Returns `InsuranceError::InvalidPolicyState` if the deductible is
    /// negative, the out-of-pocket maximum is not positive, or the coverage
    /// percentage lies outside [0, 100].
    pub fn new(
        policy_id: PolicyId,
        deductible: Decimal,
        out_of_pocket_max: Decimal,
        coverage_percentage: Decimal,
    ) -> Result<Self, InsuranceError> {
        Self::with_progress(
            policy_id,
            deductible,
            Decimal::ZERO,
            out_of_pocket_max,
            Decimal::ZERO,
            coverage_percentage,
        )
    }

    /// Restores a state with existing progress, e.g. loaded from storage
    ///
    /// # Errors
    ///
    /// Returns `InsuranceError::InvalidPolicyState` if any invariant fails.
    pub fn with_progress(
        policy_id: PolicyId,
        deductible: Decimal,
        deductible_met: Decimal,
        out_of_pocket_max: Decimal,
        out_of_pocket_current: Decimal,
        coverage_percentage: Decimal,
    ) -> Result<Self, InsuranceError> {
        let state = Self {
            policy_id,
            deductible,
            deductible_met,
            out_of_pocket_max,
            out_of_pocket_current,
            coverage_percentage,
        };
        state.validate()?;
        Ok(state)
    }

    /// Checks the state invariants
    ///
    /// # Errors
    ///
    /// Returns `InsuranceError::InvalidPolicyState` naming the first
    /// invariant that fails.
    pub fn validate(&self) -> Result<(), InsuranceError> {
        if self.deductible < Decimal::ZERO {
            return Err(InsuranceError::invalid_state(format!(
                "deductible must not be negative, got {}",
                self.deductible
            )));
        }
        if self.deductible_met < Decimal::ZERO || self.deductible_met > self.deductible {
            return Err(InsuranceError::invalid_state(format!(
                "deductible met {} must be within [0, {}]",
                self.deductible_met, self.deductible
            )));
        }
        if self.out_of_pocket_max <= Decimal::ZERO {
            return Err(InsuranceError::invalid_state(format!(
                "out-of-pocket maximum must be positive, got {}",
                self.out_of_pocket_max
            )));
        }
        if self.out_of_pocket_current < Decimal::ZERO
            || self.out_of_pocket_current > self.out_of_pocket_max
        {
            return Err(InsuranceError::invalid_state(format!(
                "out-of-pocket spending {} must be within [0, {}]",
                self.out_of_pocket_current, self.out_of_pocket_max
            )));
        }
        if self.coverage_percentage < Decimal::ZERO || self.coverage_percentage > dec!(100) {
            return Err(InsuranceError::invalid_state(format!(
                "coverage percentage {} must be within [0, 100]",
                self.coverage_percentage
            )));
        }
        Ok(())
    }

    pub fn policy_id(&self) -> PolicyId {
        self.policy_id
    }

    pub fn deductible(&self) -> Decimal {
        self.deductible
    }

    pub fn deductible_met(&self) -> Decimal {
        self.deductible_met
    }

    pub fn out_of_pocket_max(&self) -> Decimal {
        self.out_of_pocket_max
    }

    pub fn out_of_pocket_current(&self) -> Decimal {
        self.out_of_pocket_current
    }

    pub fn coverage_percentage(&self) -> Decimal {
        self.coverage_percentage
    }

    /// Insurer's coinsurance share as a rate
    pub fn coverage_rate(&self) -> Rate {
        Rate::from_percentage(self.coverage_percentage)
    }

    /// Deductible still to be met, never negative
    pub fn remaining_deductible(&self) -> Decimal {
        non_negative(self.deductible - self.deductible_met)
    }

    /// Patient spending left before the out-of-pocket maximum, never negative
    pub fn remaining_out_of_pocket(&self) -> Decimal {
        non_negative(self.out_of_pocket_max - self.out_of_pocket_current)
    }

    pub fn is_deductible_met(&self) -> bool {
        self.remaining_deductible().is_zero()
    }

    /// Once reached, the insurer pays 100% of further expenses
    pub fn is_out_of_pocket_max_reached(&self) -> bool {
        self.remaining_out_of_pocket().is_zero()
    }

    /// Returns the state after applying a deductible portion and a patient
    /// payment, each clamped at its maximum
    pub(crate) fn advanced(&self, deductible_portion: Decimal, patient_pays: Decimal) -> Self {
        Self {
            deductible_met: (self.deductible_met + deductible_portion).min(self.deductible),
            out_of_pocket_current: (self.out_of_pocket_current + patient_pays).min(self.out_of_pocket_max),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_empty() {
        let state = PolicyCoverageState::new(PolicyId::new(), dec!(1500), dec!(6000), dec!(80)).unwrap();
        assert_eq!(state.remaining_deductible(), dec!(1500));
        assert_eq!(state.remaining_out_of_pocket(), dec!(6000));
        assert!(!state.is_deductible_met());
        assert_eq!(state.coverage_rate().as_decimal(), dec!(0.8));
    }

    #[test]
    fn test_invariants_rejected() {
        let id = PolicyId::new();
        assert!(PolicyCoverageState::new(id, dec!(-1), dec!(5000), dec!(80)).is_err());
        assert!(PolicyCoverageState::new(id, dec!(1000), Decimal::ZERO, dec!(80)).is_err());
        assert!(PolicyCoverageState::new(id, dec!(1000), dec!(5000), dec!(101)).is_err());
        assert!(PolicyCoverageState::with_progress(id, dec!(1000), dec!(1001), dec!(5000), Decimal::ZERO, dec!(80)).is_err());
        assert!(PolicyCoverageState::with_progress(id, dec!(1000), dec!(500), dec!(5000), dec!(5001), dec!(80)).is_err());
    }

    #[test]
    fn test_zero_deductible_is_met() {
        let state = PolicyCoverageState::new(PolicyId::new(), Decimal::ZERO, dec!(3000), dec!(90)).unwrap();
        assert!(state.is_deductible_met());
    }
}
