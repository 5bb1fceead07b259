//! Engine configuration
//!
//! Defaults reproduce the standard threshold tables. Any value can be
//! overridden through environment variables:
//!
//! ```text
//! HEALTH_FINANCE_CLASSIFIER__POOR_DEBT_TO_INCOME=0.45
//! HEALTH_FINANCE_RISK__LOW_MAX=20
//! HEALTH_FINANCE_LOGGING__LEVEL=debug
//! HEALTH_FINANCE_LOGGING__JSON=true
//! ```

use serde::{Deserialize, Serialize};

use core_kernel::CoreError;
use domain_finance::ClassifierThresholds;
use domain_health::RiskLevelBands;

use crate::error::EngineError;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub classifier: ClassifierThresholds,
    pub risk: RiskLevelBands,
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Environment variable prefix
    pub const ENV_PREFIX: &'static str = "HEALTH_FINANCE";

    /// Loads `.env` if present, reads the environment and validates
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` if a variable cannot be parsed
    /// and `EngineError::Core` if the resulting thresholds are incoherent.
    pub fn load() -> Result<Self, EngineError> {
        dotenvy::dotenv().ok();

        let config = Self::from_env()?;
        config.validate()?;

        tracing::info!(
            log_level = %config.logging.level,
            json = config.logging.json,
            "Loaded engine configuration"
        );
        Ok(config)
    }

    /// Reads configuration from `HEALTH_FINANCE_*` variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_env_with_prefix(Self::ENV_PREFIX)
    }

    /// Reads configuration from variables with the given prefix
    ///
    /// Nested keys are separated by `__`.
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Checks every threshold table
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` describing the first problem.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.classifier.validate()?;
        self.risk.validate()?;
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::configuration("logging level must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.classifier.poor_debt_to_income, dec!(0.50));
        assert_eq!(config.risk.high_max, dec!(75));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_level_rejected() {
        let config = EngineConfig {
            logging: LoggingConfig {
                level: "  ".to_string(),
                json: false,
            },
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
