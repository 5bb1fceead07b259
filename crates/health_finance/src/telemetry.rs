//! Tracing subscriber setup
//!
//! The engine only emits events. Binaries embedding it call
//! [`init_tracing`] once at startup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::EngineError;

/// Builds the filter: RUST_LOG first, then the configured level, then `info`
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global tracing subscriber
///
/// # Errors
///
/// Returns `EngineError::Configuration` if a global subscriber is already
/// installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), EngineError> {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    let result = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|e| EngineError::Configuration(format!("tracing already initialized: {}", e)))
}
