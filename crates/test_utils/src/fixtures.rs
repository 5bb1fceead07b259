//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the finance, health and insurance
//! domains. These fixtures are consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{ConditionId, LoanId, PolicyId, UserId};
use domain_finance::{FinanceSnapshot, LoanFacts};
use domain_health::{ConditionCategory, MedicalCondition, Severity};
use domain_insurance::PolicyCoverageState;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for deterministic identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic user ID for testing
    pub fn user_id() -> UserId {
        UserId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap())
    }

    /// Creates a deterministic policy ID for testing
    pub fn policy_id() -> PolicyId {
        PolicyId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic loan ID for testing
    pub fn loan_id() -> LoanId {
        LoanId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// Creates a deterministic condition ID for testing
    pub fn condition_id() -> ConditionId {
        ConditionId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }
}

/// Fixture for dates
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard as-of date for projections (Jan 15, 2024)
    pub fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    /// Month-end date for clamping tests (Jan 31, 2024)
    pub fn month_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }
}

/// Fixture for monthly finance snapshots
pub struct SnapshotFixtures;

impl SnapshotFixtures {
    /// Income 5000, expenses 3000, loans 500 (DTI 0.10, savings 0.30)
    pub fn healthy() -> FinanceSnapshot {
        FinanceSnapshot::new(dec!(5000), dec!(3000), dec!(500))
    }

    /// No income, expenses or loans
    pub fn zero_income() -> FinanceSnapshot {
        FinanceSnapshot::new(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    }

    /// Income 4000, expenses 1000, loans 2200 (DTI 0.55)
    pub fn overextended() -> FinanceSnapshot {
        FinanceSnapshot::new(dec!(4000), dec!(1000), dec!(2200))
    }
}

/// Fixture for coverage states
pub struct CoverageFixtures;

impl CoverageFixtures {
    /// Deductible 2000 with 1800 met, 80% coverage
    pub fn nearly_met_deductible() -> PolicyCoverageState {
        PolicyCoverageState::with_progress(
            IdFixtures::policy_id(),
            dec!(2000),
            dec!(1800),
            dec!(8000),
            dec!(1800),
            dec!(80),
        )
        .unwrap()
    }

    /// Deductible met, 100 left under a 5000 maximum, 70% coverage
    pub fn near_out_of_pocket_max() -> PolicyCoverageState {
        PolicyCoverageState::with_progress(
            IdFixtures::policy_id(),
            dec!(1000),
            dec!(1000),
            dec!(5000),
            dec!(4900),
            dec!(70),
        )
        .unwrap()
    }

    /// Start of a plan year: deductible 1000, maximum 3000, 80% coverage
    pub fn fresh_plan() -> PolicyCoverageState {
        PolicyCoverageState::new(IdFixtures::policy_id(), dec!(1000), dec!(3000), dec!(80)).unwrap()
    }
}

/// Fixture for loans
pub struct LoanFixtures;

impl LoanFixtures {
    /// Balance 10000 of 12000 at 5%, paying 500 a month
    pub fn car_loan() -> LoanFacts {
        LoanFacts {
            id: IdFixtures::loan_id(),
            principal: dec!(12000),
            remaining_balance: dec!(10000),
            monthly_payment: dec!(500),
            annual_interest_rate_percent: dec!(5),
        }
    }

    /// Fully repaid loan
    pub fn paid_off() -> LoanFacts {
        LoanFacts::new(dec!(5000), Decimal::ZERO, dec!(250), dec!(4))
    }
}

/// Fixture for medical conditions
pub struct ConditionFixtures;

impl ConditionFixtures {
    /// Active severe chronic condition (10 points)
    pub fn severe_chronic() -> MedicalCondition {
        MedicalCondition {
            id: IdFixtures::condition_id(),
            ..MedicalCondition::new("Type 2 diabetes", ConditionCategory::Chronic, Severity::Severe)
        }
    }

    /// Active mild preventive entry (0 points)
    pub fn mild_preventive() -> MedicalCondition {
        MedicalCondition::new("Annual checkup", ConditionCategory::Preventive, Severity::Mild)
    }

    /// Critical chronic condition (15 points)
    pub fn critical_chronic(name: &str) -> MedicalCondition {
        MedicalCondition::new(name, ConditionCategory::Chronic, Severity::Critical)
    }
}
