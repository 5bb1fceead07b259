//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use domain_finance::{FinanceSnapshot, Frequency};
use domain_health::{ConditionCategory, MedicalCondition, Severity};
use domain_insurance::PolicyCoverageState;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::IdFixtures;

/// Strategy for non-negative amounts with two decimal places
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for strictly positive amounts with two decimal places
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for percentages in [0, 100] with two decimal places
pub fn percentage_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|basis| Decimal::new(basis, 2))
}

/// Strategy for every frequency
pub fn frequency_strategy() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::Daily),
        Just(Frequency::Weekly),
        Just(Frequency::Biweekly),
        Just(Frequency::Monthly),
        Just(Frequency::Quarterly),
        Just(Frequency::Annual),
        Just(Frequency::OneTime),
    ]
}

/// Strategy for coverage states that satisfy every state invariant
pub fn coverage_state_strategy() -> impl Strategy<Value = PolicyCoverageState> {
    (
        amount_strategy(),
        0u32..=100u32,
        positive_amount_strategy(),
        0u32..=100u32,
        percentage_strategy(),
    )
        .prop_map(|(deductible, met_pct, out_of_pocket_max, current_pct, coverage)| {
            PolicyCoverageState::with_progress(
                IdFixtures::policy_id(),
                deductible,
                deductible * Decimal::from(met_pct) / Decimal::ONE_HUNDRED,
                out_of_pocket_max,
                out_of_pocket_max * Decimal::from(current_pct) / Decimal::ONE_HUNDRED,
                coverage,
            )
            .unwrap()
        })
}

/// Strategy for a run of expenses against one policy
pub fn expense_sequence_strategy() -> impl Strategy<Value = Vec<Decimal>> {
    proptest::collection::vec(amount_strategy(), 1..16)
}

/// Strategy for monthly snapshots, including zero income
pub fn snapshot_strategy() -> impl Strategy<Value = FinanceSnapshot> {
    (amount_strategy(), amount_strategy(), amount_strategy())
        .prop_map(|(income, expenses, loans)| FinanceSnapshot::new(income, expenses, loans))
}

/// Strategy for condition categories
pub fn category_strategy() -> impl Strategy<Value = ConditionCategory> {
    prop_oneof![
        Just(ConditionCategory::Chronic),
        Just(ConditionCategory::Acute),
        Just(ConditionCategory::MentalHealth),
        Just(ConditionCategory::Preventive),
    ]
}

/// Strategy for severities
pub fn severity_strategy() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Mild),
        Just(Severity::Moderate),
        Just(Severity::Severe),
        Just(Severity::Critical),
    ]
}

/// Strategy for active or resolved conditions
pub fn condition_strategy() -> impl Strategy<Value = MedicalCondition> {
    (category_strategy(), severity_strategy(), any::<bool>()).prop_map(|(category, severity, active)| {
        let condition = MedicalCondition::new("Generated", category, severity);
        if active {
            condition
        } else {
            condition.resolved()
        }
    })
}

/// Strategy for condition lists
pub fn conditions_strategy() -> impl Strategy<Value = Vec<MedicalCondition>> {
    proptest::collection::vec(condition_strategy(), 0..12)
}
