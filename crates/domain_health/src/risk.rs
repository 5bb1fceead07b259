//! Health risk aggregation
//!
//! Sums per-condition contributions into a total score, buckets it into a
//! risk level and maps the level to the multiplier downstream purchase
//! decisions apply.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ConditionId, CoreError};

use crate::condition::{ConditionCategory, MedicalCondition, Severity};

/// Coarse health risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// Multiplier applied to a purchase price before it is compared with
    /// the affordability ceiling
    pub fn purchase_multiplier(&self) -> Decimal {
        match self {
            RiskLevel::Low => dec!(1.0),
            RiskLevel::Moderate => dec!(1.2),
            RiskLevel::High => dec!(1.5),
            RiskLevel::Critical => dec!(2.0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper bounds (inclusive) of each risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskLevelBands {
    pub low_max: Decimal,
    pub moderate_max: Decimal,
    pub high_max: Decimal,
}

impl Default for RiskLevelBands {
    fn default() -> Self {
        Self {
            low_max: dec!(25),
            moderate_max: dec!(50),
            high_max: dec!(75),
        }
    }
}

impl RiskLevelBands {
    /// Buckets a total score
    pub fn level_for(&self, score: Decimal) -> RiskLevel {
        if score <= self.low_max {
            RiskLevel::Low
        } else if score <= self.moderate_max {
            RiskLevel::Moderate
        } else if score <= self.high_max {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    /// Checks the bands are non-negative and ascending
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` otherwise.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.low_max < Decimal::ZERO {
            return Err(CoreError::configuration("risk band low_max must not be negative"));
        }
        if !(self.low_max <= self.moderate_max && self.moderate_max <= self.high_max) {
            return Err(CoreError::configuration(
                "risk bands must satisfy low_max <= moderate_max <= high_max",
            ));
        }
        Ok(())
    }
}

/// One condition's share of the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskContribution {
    pub condition_id: ConditionId,
    pub points: Decimal,
}

/// Aggregate risk across a set of conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub total_score: Decimal,
    pub level: RiskLevel,
    pub purchase_multiplier: Decimal,
    /// One entry per input condition, in input order
    pub contributions: Vec<RiskContribution>,
}

impl RiskAssessment {
    /// Number of conditions that added points
    pub fn contributing_conditions(&self) -> usize {
        self.contributions.iter().filter(|c| c.points > Decimal::ZERO).count()
    }
}

/// Aggregates condition risk
#[derive(Debug, Clone, Default)]
pub struct RiskAggregator {
    bands: RiskLevelBands,
}

impl RiskAggregator {
    pub fn new(bands: RiskLevelBands) -> Self {
        Self { bands }
    }

    /// Total risk points across conditions, without rounding
    pub fn total_score(&self, conditions: &[MedicalCondition]) -> Decimal {
        conditions.iter().map(MedicalCondition::risk_contribution).sum()
    }

    /// Scores a set of conditions
    pub fn assess(&self, conditions: &[MedicalCondition]) -> RiskAssessment {
        let contributions: Vec<RiskContribution> = conditions
            .iter()
            .map(|condition| RiskContribution {
                condition_id: condition.id,
                points: condition.risk_contribution(),
            })
            .collect();

        let total_score: Decimal = contributions.iter().map(|c| c.points).sum();
        let level = self.bands.level_for(total_score);

        tracing::debug!(
            conditions = conditions.len(),
            %total_score,
            %level,
            "Aggregated health risk"
        );

        RiskAssessment {
            total_score,
            level,
            purchase_multiplier: level.purchase_multiplier(),
            contributions,
        }
    }
}

/// Risk points for raw category and severity labels
///
/// Unrecognized labels contribute zero rather than failing.
pub fn risk_contribution_for_labels(category: &str, severity: &str, is_active: bool) -> Decimal {
    match (ConditionCategory::parse(category), Severity::parse(severity)) {
        (Some(category), Some(severity)) if is_active => severity.points() * category.multiplier(severity),
        (Some(_), Some(_)) => Decimal::ZERO,
        _ => {
            tracing::warn!(category, severity, "Unrecognized condition labels, contributing zero risk");
            Decimal::ZERO
        }
    }
}
