//! Lookup tables: industry EBITDA multiples and risk discount rates.
//!
//! Tables are immutable once built and are handed to the engine at
//! construction. `LookupTables::standard()` returns the built-in defaults.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::errors::{ConfigurationError, ValidationError};
use super::input::RiskLevel;

/// EBITDA multiple bounds for a sector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultipleRange {
    pub min: f64,
    pub max: f64,
}

impl MultipleRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the two bounds.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

static STANDARD: Lazy<LookupTables> = Lazy::new(|| {
    LookupTables::new(
        [
            ("saas", MultipleRange::new(8.0, 12.0)),
            ("manufacturing", MultipleRange::new(4.0, 8.0)),
            ("retail", MultipleRange::new(3.0, 6.0)),
            ("healthcare", MultipleRange::new(6.0, 10.0)),
            ("fintech", MultipleRange::new(7.0, 11.0)),
        ],
        [
            (RiskLevel::Low, 0.10),
            (RiskLevel::Medium, 0.15),
            (RiskLevel::High, 0.20),
        ],
    )
});

/// Sector multiples and risk discount rates.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTables {
    sectors: BTreeMap<String, MultipleRange>,
    discount_rates: BTreeMap<RiskLevel, f64>,
}

impl LookupTables {
    /// Builds tables from sector and risk entries. Sector keys are normalized
    /// to trimmed lowercase.
    pub fn new<S>(
        sectors: impl IntoIterator<Item = (S, MultipleRange)>,
        discount_rates: impl IntoIterator<Item = (RiskLevel, f64)>,
    ) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            sectors: sectors
                .into_iter()
                .map(|(name, range)| (normalize_sector(name.as_ref()), range))
                .collect(),
            discount_rates: discount_rates.into_iter().collect(),
        }
    }

    /// The built-in tables.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Looks up the multiple range for a sector.
    pub fn multiple_for(&self, sector: &str) -> Result<MultipleRange, ValidationError> {
        self.sectors
            .get(&normalize_sector(sector))
            .copied()
            .ok_or_else(|| ValidationError::unknown_sector(sector))
    }

    /// Looks up the discount rate for a risk tier.
    pub fn discount_rate_for(&self, risk_level: RiskLevel) -> Result<f64, ValidationError> {
        self.discount_rates
            .get(&risk_level)
            .copied()
            .ok_or_else(|| ValidationError::unknown_risk_level(risk_level.as_str()))
    }

    /// Known sector names in sorted order.
    pub fn sectors(&self) -> impl Iterator<Item = (&str, &MultipleRange)> {
        self.sectors.iter().map(|(name, range)| (name.as_str(), range))
    }

    /// Configured risk tiers, lowest risk first.
    pub fn discount_rates(&self) -> impl Iterator<Item = (RiskLevel, f64)> + '_ {
        self.discount_rates.iter().map(|(level, rate)| (*level, *rate))
    }

    /// Checks that every entry can produce a finite valuation.
    ///
    /// Discount rates must strictly exceed `terminal_growth_rate`, otherwise the
    /// perpetuity formula divides by a non-positive number.
    pub fn validate(&self, terminal_growth_rate: f64) -> Result<(), ConfigurationError> {
        if self.sectors.is_empty() {
            return Err(ConfigurationError::EmptyMultipleTable);
        }

        for (sector, range) in &self.sectors {
            let valid = range.min.is_finite()
                && range.max.is_finite()
                && range.min >= 0.0
                && range.min <= range.max;
            if !valid {
                return Err(ConfigurationError::InvalidMultipleRange {
                    sector: sector.clone(),
                    min: range.min,
                    max: range.max,
                });
            }
        }

        for (level, rate) in &self.discount_rates {
            check_discount_rate(*level, *rate, terminal_growth_rate)?;
        }
        Ok(())
    }
}

impl Default for LookupTables {
    fn default() -> Self {
        Self::standard()
    }
}

/// Fails when the perpetuity denominator `rate - growth` is not positive.
pub(crate) fn check_discount_rate(
    risk_level: RiskLevel,
    rate: f64,
    terminal_growth_rate: f64,
) -> Result<(), ConfigurationError> {
    if !rate.is_finite() || rate <= terminal_growth_rate {
        return Err(ConfigurationError::DegenerateDiscountRate {
            risk_level: risk_level.to_string(),
            rate,
            terminal_growth: terminal_growth_rate,
        });
    }
    Ok(())
}

fn normalize_sector(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
