//! Expense allocation between insurer and patient
//!
//! Steps, in order:
//!
//! 1. The unmet deductible absorbs as much of the expense as it can; that
//!    portion is the patient's.
//! 2. The insurer pays its coverage percentage of the remainder; the patient
//!    pays the rest.
//! 3. If the patient's total would push out-of-pocket spending past the
//!    maximum, the patient pays only what is left under the maximum and the
//!    insurer pays everything else.
//!
//! Allocation is not idempotent: it advances cumulative counters, so the
//! same expense must be applied exactly once.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::non_negative;

use crate::coverage::PolicyCoverageState;
use crate::error::InsuranceError;

/// How one expense was split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageAllocation {
    pub expense_amount: Decimal,
    /// Part of the expense applied to the deductible
    pub deductible_portion: Decimal,
    /// Part of the expense the coverage percentage applied to
    pub amount_subject_to_coverage: Decimal,
    pub insurer_pays: Decimal,
    pub patient_pays: Decimal,
    /// True when the out-of-pocket maximum capped the patient's share
    pub out_of_pocket_capped: bool,
    /// State to persist for the next allocation
    pub next_state: PolicyCoverageState,
}

/// Splits an expense against the current coverage state
///
/// No rounding is applied; `insurer_pays + patient_pays` equals the expense.
///
/// # Errors
///
/// * `InsuranceError::InvalidExpense` if the expense is negative
/// * `InsuranceError::InvalidPolicyState` if the state breaks an invariant
///
/// # Example
///
/// ```rust,ignore
/// let state = PolicyCoverageState::with_progress(id, dec!(2000), dec!(1800), dec!(6000), dec!(1800), dec!(80))?;
/// let allocation = allocate(&state, dec!(500))?;
/// assert_eq!(allocation.insurer_pays, dec!(240));
/// assert_eq!(allocation.patient_pays, dec!(260));
/// ```
pub fn allocate(
    state: &PolicyCoverageState,
    expense_amount: Decimal,
) -> Result<CoverageAllocation, InsuranceError> {
    if expense_amount < Decimal::ZERO {
        return Err(InsuranceError::InvalidExpense(format!(
            "expense amount must not be negative, got {}",
            expense_amount
        )));
    }
    state.validate()?;

    let deductible_portion = expense_amount.min(state.remaining_deductible());
    let amount_subject_to_coverage = expense_amount - deductible_portion;

    let coinsurance_insurer = state.coverage_rate().apply(amount_subject_to_coverage);
    let coinsurance_patient = amount_subject_to_coverage - coinsurance_insurer;
    let patient_liability = deductible_portion + coinsurance_patient;

    let (insurer_pays, patient_pays, out_of_pocket_capped) =
        if state.out_of_pocket_current() + patient_liability > state.out_of_pocket_max() {
            let capped = non_negative(state.out_of_pocket_max() - state.out_of_pocket_current());
            (expense_amount - capped, capped, true)
        } else {
            (coinsurance_insurer, patient_liability, false)
        };

    let next_state = state.advanced(deductible_portion, patient_pays);

    tracing::debug!(
        policy_id = %state.policy_id(),
        %expense_amount,
        %deductible_portion,
        %insurer_pays,
        %patient_pays,
        out_of_pocket_capped,
        "Allocated expense"
    );

    Ok(CoverageAllocation {
        expense_amount,
        deductible_portion,
        amount_subject_to_coverage,
        insurer_pays,
        patient_pays,
        out_of_pocket_capped,
        next_state,
    })
}

/// Allocations for a run of expenses against one policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationLedger {
    /// One allocation per expense, in input order
    pub allocations: Vec<CoverageAllocation>,
    pub final_state: PolicyCoverageState,
}

impl AllocationLedger {
    pub fn total_insurer_pays(&self) -> Decimal {
        self.allocations.iter().map(|a| a.insurer_pays).sum()
    }

    pub fn total_patient_pays(&self) -> Decimal {
        self.allocations.iter().map(|a| a.patient_pays).sum()
    }
}

/// Applies expenses one after another, threading the state through
///
/// # Errors
///
/// Fails on the first expense `allocate` rejects; nothing is returned for
/// the expenses before it.
pub fn allocate_sequence(
    state: &PolicyCoverageState,
    expenses: &[Decimal],
) -> Result<AllocationLedger, InsuranceError> {
    let mut current = *state;
    let mut allocations = Vec::with_capacity(expenses.len());

    for expense in expenses {
        let allocation = allocate(&current, *expense)?;
        current = allocation.next_state;
        allocations.push(allocation);
    }

    Ok(AllocationLedger {
        allocations,
        final_state: current,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::PolicyId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_partially_met_deductible() {
        let state = PolicyCoverageState::with_progress(
            PolicyId::new(), dec!(2000), dec!(1800), dec!(6000), dec!(1800), dec!(80),
        ).unwrap();

        let allocation = allocate(&state, dec!(500)).unwrap();

        assert_eq!(allocation.deductible_portion, dec!(200));
        assert_eq!(allocation.amount_subject_to_coverage, dec!(300));
        assert_eq!(allocation.insurer_pays, dec!(240));
        assert_eq!(allocation.patient_pays, dec!(260));
        assert_eq!(allocation.next_state.deductible_met(), dec!(2000));
        assert!(!allocation.out_of_pocket_capped);
    }

    #[test]
    fn test_out_of_pocket_cap() {
        let state = PolicyCoverageState::with_progress(
            PolicyId::new(), dec!(1000), dec!(1000), dec!(5000), dec!(4900), dec!(70),
        ).unwrap();

        let allocation = allocate(&state, dec!(2000)).unwrap();

        assert_eq!(allocation.patient_pays, dec!(100));
        assert_eq!(allocation.insurer_pays, dec!(1900));
        assert!(allocation.out_of_pocket_capped);
        assert!(allocation.next_state.is_out_of_pocket_max_reached());
    }

    #[test]
    fn test_negative_expense_rejected() {
        let state = PolicyCoverageState::new(PolicyId::new(), dec!(500), dec!(3000), dec!(80)).unwrap();
        assert!(matches!(allocate(&state, dec!(-1)), Err(InsuranceError::InvalidExpense(_))));
    }
}
