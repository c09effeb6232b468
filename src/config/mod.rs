//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `HOME_DIAGNOSIS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use home_diagnosis::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Sessions stored in {}", config.storage.data_dir);
//! ```

mod catalog;
mod error;
mod loan;
mod storage;
mod telemetry;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use loan::LoanConfig;
pub use storage::StorageConfig;
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration backed by the built-in catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Catalog source (built-in or YAML file)
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Session storage directory
    #[serde(default)]
    pub storage: StorageConfig,

    /// Loan assumptions for blank budget answers
    #[serde(default)]
    pub loan: LoanConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `HOME_DIAGNOSIS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `HOME_DIAGNOSIS__CATALOG__PATH=./catalog.yaml` -> `catalog.path`
    /// - `HOME_DIAGNOSIS__LOAN__DEFAULT_TERM_YEARS=30` -> `loan.default_term_years`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HOME_DIAGNOSIS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` or `ConfigError::ValidationFailed`
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.catalog.validate()?;
        self.storage.validate()?;
        self.loan.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "HOME_DIAGNOSIS__CATALOG__PATH",
        "HOME_DIAGNOSIS__STORAGE__DATA_DIR",
        "HOME_DIAGNOSIS__LOAN__DEFAULT_TERM_YEARS",
        "HOME_DIAGNOSIS__LOAN__DEFAULT_ANNUAL_RATE_PERCENT",
        "HOME_DIAGNOSIS__TELEMETRY__LOG_LEVEL",
        "HOME_DIAGNOSIS__TELEMETRY__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.storage.data_dir, "./data/sessions");
        assert_eq!(config.loan.default_term_years, 35);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("HOME_DIAGNOSIS__CATALOG__PATH", "/etc/home/catalog.yaml");
        env::set_var("HOME_DIAGNOSIS__STORAGE__DATA_DIR", "/var/lib/home");
        env::set_var("HOME_DIAGNOSIS__LOAN__DEFAULT_TERM_YEARS", "30");
        env::set_var("HOME_DIAGNOSIS__LOAN__DEFAULT_ANNUAL_RATE_PERCENT", "0.9");
        env::set_var("HOME_DIAGNOSIS__TELEMETRY__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("/etc/home/catalog.yaml"));
        assert_eq!(config.storage.data_dir, "/var/lib/home");
        assert_eq!(config.loan.default_term_years, 30);
        assert_eq!(config.loan.default_annual_rate_percent, 0.9);
        assert!(config.telemetry.json);
    }

    #[test]
    fn test_load_validated_rejects_bad_rate() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("HOME_DIAGNOSIS__LOAN__DEFAULT_ANNUAL_RATE_PERCENT", "45");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidInterestRate))
        ));
    }

    #[test]
    fn test_unparseable_value_is_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("HOME_DIAGNOSIS__LOAN__DEFAULT_TERM_YEARS", "forever");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
