//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! and an optional file using the `config` and `dotenvy` crates. Environment
//! variables use the `BUSINESS_VALUATION` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use business_valuation::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod server;
mod valuation;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use valuation::ValuationConfig;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an optional configuration file.
pub const CONFIG_FILE_ENV: &str = "BUSINESS_VALUATION_CONFIG";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Valuation model (assumptions and lookup table overrides)
    #[serde(default)]
    pub valuation: ValuationConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads the file named by `BUSINESS_VALUATION_CONFIG`, if set
    /// 3. Reads environment variables with `BUSINESS_VALUATION` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `BUSINESS_VALUATION__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BUSINESS_VALUATION__VALUATION__ASSUMPTIONS__FORECAST_YEARS=7`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or values cannot be
    /// parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let file = std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from);
        Self::load_from(file.as_deref())
    }

    /// Load configuration from an explicit file plus environment variables
    ///
    /// The file format is chosen by extension (TOML, JSON, YAML). Environment
    /// variables override file values.
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path.to_path_buf()));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("BUSINESS_VALUATION")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.valuation.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::valuation::{MultipleRange, RiskLevel};
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("BUSINESS_VALUATION__SERVER__PORT");
        env::remove_var("BUSINESS_VALUATION__SERVER__ENVIRONMENT");
        env::remove_var("BUSINESS_VALUATION__VALUATION__ASSUMPTIONS__FORECAST_YEARS");
    }

    #[test]
    fn test_load_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load_from(None).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.valuation.sectors.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BUSINESS_VALUATION__SERVER__PORT", "3000");
        let result = AppConfig::load_from(None);
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BUSINESS_VALUATION__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load_from(None);
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_assumption_override_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BUSINESS_VALUATION__VALUATION__ASSUMPTIONS__FORECAST_YEARS", "7");
        let result = AppConfig::load_from(None);
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.valuation.assumptions.forecast_years, 7);
        assert_eq!(config.valuation.assumptions.terminal_growth_rate, 0.02);
    }

    #[test]
    fn test_oversized_forecast_horizon_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var(
            "BUSINESS_VALUATION__VALUATION__ASSUMPTIONS__FORECAST_YEARS",
            "3000000000",
        );
        let result = AppConfig::load_from(None);
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidValuationModel(_))
        ));
    }

    #[test]
    fn test_load_tables_from_toml_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9090

[valuation.sectors.biotech]
min = 10.0
max = 14.0

[valuation.discount_rates]
low = 0.09
medium = 0.14
high = 0.21
"#
        )
        .unwrap();

        let config = AppConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9090);

        let tables = config.valuation.lookup_tables().unwrap();
        assert_eq!(tables.multiple_for("biotech").unwrap(), MultipleRange::new(10.0, 14.0));
        assert_eq!(tables.discount_rate_for(RiskLevel::High).unwrap(), 0.21);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let result = AppConfig::load_from(Some(Path::new("/nonexistent/valuation.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
