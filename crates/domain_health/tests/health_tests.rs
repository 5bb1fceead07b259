//! Comprehensive tests for domain_health

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_health::{
    Bmi, BmiCategory, ConditionCategory, HealthError, MedicalCondition, RiskAggregator,
    RiskLevel, RiskLevelBands, Severity,
};

// ============================================================================
// Condition Weighting Tests
// ============================================================================

mod weighting_tests {
    use super::*;

    #[test]
    fn test_severity_points_table() {
        assert_eq!(Severity::Mild.points(), dec!(2));
        assert_eq!(Severity::Moderate.points(), dec!(5));
        assert_eq!(Severity::Severe.points(), dec!(10));
        assert_eq!(Severity::Critical.points(), dec!(15));
    }

    #[test]
    fn test_acute_multipliers() {
        let acute = ConditionCategory::Acute;
        assert_eq!(acute.multiplier(Severity::Mild), dec!(0.5));
        assert_eq!(acute.multiplier(Severity::Moderate), dec!(0.5));
        assert_eq!(acute.multiplier(Severity::Severe), dec!(0.5));
        assert_eq!(acute.multiplier(Severity::Critical), dec!(0.533));
    }

    #[test]
    fn test_mental_health_multipliers() {
        let mental = ConditionCategory::MentalHealth;
        assert_eq!(mental.multiplier(Severity::Mild), dec!(0.6));
        assert_eq!(mental.multiplier(Severity::Severe), dec!(0.6));
        assert_eq!(mental.multiplier(Severity::Critical), dec!(0.667));
    }

    #[test]
    fn test_preventive_never_contributes() {
        for severity in [Severity::Mild, Severity::Moderate, Severity::Severe, Severity::Critical] {
            let condition = MedicalCondition::new("annual physical", ConditionCategory::Preventive, severity);
            assert_eq!(condition.risk_contribution(), Decimal::ZERO);
        }
    }

    #[test]
    fn test_category_parse_variants() {
        assert_eq!(ConditionCategory::parse("Mental Health"), Some(ConditionCategory::MentalHealth));
        assert_eq!(ConditionCategory::parse("CHRONIC"), Some(ConditionCategory::Chronic));
        assert_eq!(ConditionCategory::parse("other"), None);
        assert_eq!(Severity::parse("Severe"), Some(Severity::Severe));
    }

    #[test]
    fn test_condition_serializes_snake_case() {
        let json = serde_json::to_string(&ConditionCategory::MentalHealth).unwrap();
        assert_eq!(json, "\"mental_health\"");
    }
}

// ============================================================================
// Aggregation Tests
// ============================================================================

mod aggregation_tests {
    use super::*;

    #[test]
    fn test_severe_chronic_plus_mild_preventive() {
        let conditions = vec![
            MedicalCondition::new("hypertension", ConditionCategory::Chronic, Severity::Severe),
            MedicalCondition::new("screening", ConditionCategory::Preventive, Severity::Mild),
        ];

        let assessment = RiskAggregator::default().assess(&conditions);

        assert_eq!(assessment.total_score, dec!(10));
        assert_eq!(assessment.level, RiskLevel::Low);
        assert_eq!(assessment.contributions.len(), 2);
        assert_eq!(assessment.contributions[1].points, Decimal::ZERO);
        assert_eq!(assessment.contributing_conditions(), 1);
    }

    #[test]
    fn test_mixed_conditions_reach_moderate() {
        let conditions = vec![
            MedicalCondition::new("diabetes", ConditionCategory::Chronic, Severity::Critical),
            MedicalCondition::new("asthma", ConditionCategory::Chronic, Severity::Moderate),
            MedicalCondition::new("depression", ConditionCategory::MentalHealth, Severity::Critical),
            MedicalCondition::new("pneumonia", ConditionCategory::Acute, Severity::Critical),
        ];

        let assessment = RiskAggregator::default().assess(&conditions);

        // 15 + 5 + 10.005 + 7.995
        assert_eq!(assessment.total_score, dec!(38));
        assert_eq!(assessment.level, RiskLevel::Moderate);
        assert_eq!(assessment.purchase_multiplier, dec!(1.2));
    }

    #[test]
    fn test_resolved_conditions_are_ignored() {
        let conditions = vec![
            MedicalCondition::new("cancer", ConditionCategory::Chronic, Severity::Critical).resolved(),
            MedicalCondition::new("migraine", ConditionCategory::Chronic, Severity::Mild),
        ];

        assert_eq!(RiskAggregator::default().total_score(&conditions), dec!(2));
    }

    #[test]
    fn test_many_critical_conditions_are_critical_risk() {
        let conditions: Vec<MedicalCondition> = (0..6)
            .map(|i| MedicalCondition::new(format!("condition {}", i), ConditionCategory::Chronic, Severity::Critical))
            .collect();

        let assessment = RiskAggregator::default().assess(&conditions);

        assert_eq!(assessment.total_score, dec!(90));
        assert_eq!(assessment.level, RiskLevel::Critical);
        assert_eq!(assessment.purchase_multiplier, dec!(2.0));
    }

    #[test]
    fn test_custom_bands() {
        let aggregator = RiskAggregator::new(RiskLevelBands {
            low_max: dec!(5),
            moderate_max: dec!(8),
            high_max: dec!(9),
        });
        let conditions = vec![MedicalCondition::new("copd", ConditionCategory::Chronic, Severity::Severe)];

        assert_eq!(aggregator.assess(&conditions).level, RiskLevel::Critical);
    }

    #[test]
    fn test_multiplier_table() {
        assert_eq!(RiskLevel::Low.purchase_multiplier(), dec!(1.0));
        assert_eq!(RiskLevel::Moderate.purchase_multiplier(), dec!(1.2));
        assert_eq!(RiskLevel::High.purchase_multiplier(), dec!(1.5));
        assert_eq!(RiskLevel::Critical.purchase_multiplier(), dec!(2.0));
        assert!(RiskLevel::High > RiskLevel::Moderate);
    }
}

// ============================================================================
// BMI Tests
// ============================================================================

mod bmi_tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(Bmi::calculate(dec!(180), dec!(55)).unwrap().category(), BmiCategory::Underweight);
        assert_eq!(Bmi::calculate(dec!(180), dec!(70)).unwrap().category(), BmiCategory::Normal);
        assert_eq!(Bmi::calculate(dec!(180), dec!(90)).unwrap().category(), BmiCategory::Overweight);
        assert_eq!(Bmi::calculate(dec!(180), dec!(110)).unwrap().category(), BmiCategory::Obese);
    }

    #[test]
    fn test_full_precision_kept_until_display() {
        let bmi = Bmi::calculate(dec!(165), dec!(68)).unwrap();
        assert_ne!(bmi.value(), bmi.rounded());
        assert_eq!(bmi.rounded(), dec!(24.98));
    }

    #[test]
    fn test_invalid_height_message() {
        let err = Bmi::calculate(dec!(-170), dec!(70)).unwrap_err();
        assert_eq!(err, HealthError::InvalidInput("height must be positive, got -170 cm".to_string()));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn category_strategy() -> impl Strategy<Value = ConditionCategory> {
        prop_oneof![
            Just(ConditionCategory::Chronic),
            Just(ConditionCategory::Acute),
            Just(ConditionCategory::MentalHealth),
            Just(ConditionCategory::Preventive),
        ]
    }

    fn severity_strategy() -> impl Strategy<Value = Severity> {
        prop_oneof![
            Just(Severity::Mild),
            Just(Severity::Moderate),
            Just(Severity::Severe),
            Just(Severity::Critical),
        ]
    }

    fn condition_strategy() -> impl Strategy<Value = MedicalCondition> {
        (category_strategy(), severity_strategy(), any::<bool>()).prop_map(|(category, severity, active)| {
            let condition = MedicalCondition::new("Generated", category, severity);
            if active { condition } else { condition.resolved() }
        })
    }

    proptest! {
        #[test]
        fn total_score_is_sum_of_contributions(
            conditions in proptest::collection::vec(condition_strategy(), 0..16)
        ) {
            let assessment = RiskAggregator::default().assess(&conditions);
            let summed: Decimal = assessment.contributions.iter().map(|c| c.points).sum();

            prop_assert_eq!(assessment.total_score, summed);
            prop_assert_eq!(assessment.contributions.len(), conditions.len());
            prop_assert_eq!(assessment.level, RiskLevelBands::default().level_for(summed));
        }

        #[test]
        fn inactive_and_preventive_contribute_nothing(condition in condition_strategy()) {
            let points = condition.risk_contribution();

            if !condition.is_active || condition.category == ConditionCategory::Preventive {
                prop_assert_eq!(points, Decimal::ZERO);
            } else {
                prop_assert!(points > Decimal::ZERO);
            }
        }
    }
}
