//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_insurance::{CoverageAllocation, PolicyCoverageState};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Tolerance for comparing amounts that went through division
pub const CENT: Decimal = dec!(0.01);

/// Asserts that two decimals are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the values differ by more than tolerance
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that an allocation splits its expense completely
///
/// # Panics
///
/// Panics if either share is negative or the shares do not sum to the
/// expense within a cent
pub fn assert_allocation_conserves(allocation: &CoverageAllocation) {
    assert!(
        allocation.insurer_pays >= Decimal::ZERO,
        "Insurer share is negative: {}",
        allocation.insurer_pays
    );
    assert!(
        allocation.patient_pays >= Decimal::ZERO,
        "Patient share is negative: {}",
        allocation.patient_pays
    );
    assert_decimal_approx_eq(
        allocation.insurer_pays + allocation.patient_pays,
        allocation.expense_amount,
        CENT,
    );
}

/// Asserts that cumulative counters sit within their limits
///
/// # Panics
///
/// Panics if either counter is negative or above its maximum
pub fn assert_state_within_limits(state: &PolicyCoverageState) {
    assert!(
        state.deductible_met() >= Decimal::ZERO && state.deductible_met() <= state.deductible(),
        "Deductible met {} outside [0, {}]",
        state.deductible_met(),
        state.deductible()
    );
    assert!(
        state.out_of_pocket_current() >= Decimal::ZERO
            && state.out_of_pocket_current() <= state.out_of_pocket_max(),
        "Out-of-pocket {} outside [0, {}]",
        state.out_of_pocket_current(),
        state.out_of_pocket_max()
    );
}

/// Asserts that `next` never moved a counter backwards relative to `previous`
///
/// # Panics
///
/// Panics if either counter decreased
pub fn assert_state_advanced(previous: &PolicyCoverageState, next: &PolicyCoverageState) {
    assert!(
        next.deductible_met() >= previous.deductible_met(),
        "Deductible met decreased: {} -> {}",
        previous.deductible_met(),
        next.deductible_met()
    );
    assert!(
        next.out_of_pocket_current() >= previous.out_of_pocket_current(),
        "Out-of-pocket decreased: {} -> {}",
        previous.out_of_pocket_current(),
        next.out_of_pocket_current()
    );
}
