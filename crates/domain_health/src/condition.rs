//! Medical conditions and their weighting tables

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::ConditionId;

/// Broad category of a medical condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    Chronic,
    Acute,
    MentalHealth,
    /// Screening and preventive care; never contributes risk
    Preventive,
}

impl ConditionCategory {
    /// Parses a category label; unknown labels yield `None`
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "chronic" => Some(ConditionCategory::Chronic),
            "acute" => Some(ConditionCategory::Acute),
            "mental_health" | "mental-health" | "mental health" => Some(ConditionCategory::MentalHealth),
            "preventive" => Some(ConditionCategory::Preventive),
            _ => None,
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConditionCategory::Chronic => "Chronic",
            ConditionCategory::Acute => "Acute",
            ConditionCategory::MentalHealth => "Mental Health",
            ConditionCategory::Preventive => "Preventive",
        }
    }

    /// Display name for a raw label, `"Unknown"` when unrecognized
    pub fn display_name_for(label: &str) -> &'static str {
        Self::parse(label).map_or("Unknown", |c| c.display_name())
    }

    /// Weight applied to severity points for this category
    ///
    /// The acute and mental-health ratios are carried as exact literals.
    pub fn multiplier(&self, severity: Severity) -> Decimal {
        match (self, severity) {
            (ConditionCategory::Chronic, _) => dec!(1.0),
            (ConditionCategory::Acute, Severity::Critical) => dec!(0.533),
            (ConditionCategory::Acute, _) => dec!(0.5),
            (ConditionCategory::MentalHealth, Severity::Critical) => dec!(0.667),
            (ConditionCategory::MentalHealth, _) => dec!(0.6),
            (ConditionCategory::Preventive, _) => Decimal::ZERO,
        }
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Severity of a medical condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
    Critical,
}

impl Severity {
    /// Parses a severity label; unknown labels yield `None`
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "mild" => Some(Severity::Mild),
            "moderate" => Some(Severity::Moderate),
            "severe" => Some(Severity::Severe),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
            Severity::Critical => "Critical",
        }
    }

    /// Display name for a raw label, `"Unknown"` when unrecognized
    pub fn display_name_for(label: &str) -> &'static str {
        Self::parse(label).map_or("Unknown", |s| s.display_name())
    }

    /// Base risk points before the category weighting
    pub fn points(&self) -> Decimal {
        match self {
            Severity::Mild => dec!(2),
            Severity::Moderate => dec!(5),
            Severity::Severe => dec!(10),
            Severity::Critical => dec!(15),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A recorded medical condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalCondition {
    pub id: ConditionId,
    pub name: String,
    pub category: ConditionCategory,
    pub severity: Severity,
    pub is_active: bool,
}

impl MedicalCondition {
    /// Creates an active condition
    pub fn new(name: impl Into<String>, category: ConditionCategory, severity: Severity) -> Self {
        Self {
            id: ConditionId::new_v7(),
            name: name.into(),
            category,
            severity,
            is_active: true,
        }
    }

    /// Marks the condition resolved
    pub fn resolved(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Risk points this condition contributes
    pub fn risk_contribution(&self) -> Decimal {
        if !self.is_active {
            return Decimal::ZERO;
        }
        self.severity.points() * self.category.multiplier(self.severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chronic_uses_full_points() {
        let condition = MedicalCondition::new("diabetes", ConditionCategory::Chronic, Severity::Severe);
        assert_eq!(condition.risk_contribution(), dec!(10));
    }

    #[test]
    fn test_critical_acute_literal() {
        let condition = MedicalCondition::new("sepsis", ConditionCategory::Acute, Severity::Critical);
        assert_eq!(condition.risk_contribution(), dec!(7.995));
    }

    #[test]
    fn test_inactive_contributes_nothing() {
        let condition = MedicalCondition::new("fracture", ConditionCategory::Acute, Severity::Severe).resolved();
        assert_eq!(condition.risk_contribution(), Decimal::ZERO);
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(ConditionCategory::display_name_for("genetic"), "Unknown");
        assert_eq!(Severity::display_name_for(""), "Unknown");
        assert_eq!(ConditionCategory::display_name_for("mental_health"), "Mental Health");
    }
}
