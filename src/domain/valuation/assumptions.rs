//! Model constants used by the estimators.

use serde::{Deserialize, Serialize};

use super::errors::ConfigurationError;

/// Default explicit forecast horizon for the DCF estimator.
pub const DEFAULT_FORECAST_YEARS: u32 = 5;

/// Longest accepted explicit forecast horizon.
pub const MAX_FORECAST_YEARS: u32 = 100;

/// Default perpetuity growth rate after the forecast horizon.
pub const DEFAULT_TERMINAL_GROWTH_RATE: f64 = 0.02;

/// Tunable constants of the valuation model.
///
/// The haircut and comparables factors have no derivation behind them; they
/// are placeholders kept configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationAssumptions {
    pub forecast_years: u32,
    pub terminal_growth_rate: f64,
    pub dcf_low_haircut: f64,
    pub comparables_low_factor: f64,
    pub comparables_high_factor: f64,
}

impl Default for ValuationAssumptions {
    fn default() -> Self {
        Self {
            forecast_years: DEFAULT_FORECAST_YEARS,
            terminal_growth_rate: DEFAULT_TERMINAL_GROWTH_RATE,
            dcf_low_haircut: 0.9,
            comparables_low_factor: 0.9,
            comparables_high_factor: 1.1,
        }
    }
}

impl ValuationAssumptions {
    /// Rejects values that would make the estimators meaningless.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.forecast_years == 0 || self.forecast_years > MAX_FORECAST_YEARS {
            return Err(ConfigurationError::InvalidAssumption {
                name: "forecast_years",
                value: f64::from(self.forecast_years),
            });
        }

        for (name, value) in [
            ("terminal_growth_rate", self.terminal_growth_rate),
            ("dcf_low_haircut", self.dcf_low_haircut),
            ("comparables_low_factor", self.comparables_low_factor),
            ("comparables_high_factor", self.comparables_high_factor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::InvalidAssumption { name, value });
            }
        }
        Ok(())
    }
}
