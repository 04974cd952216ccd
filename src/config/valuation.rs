//! Valuation model configuration
//!
//! Assumption overrides and optional replacement lookup tables. Omitted
//! tables fall back to the built-in defaults.

use serde::Deserialize;
use std::collections::BTreeMap;

use super::error::ValidationError;
use crate::domain::valuation::{
    LookupTables, MultipleRange, RiskLevel, ValuationAssumptions, ValuationEngine,
};

/// Valuation model configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValuationConfig {
    /// Model constants (forecast horizon, terminal growth, haircuts)
    #[serde(default)]
    pub assumptions: ValuationAssumptions,

    /// Replacement sector multiple table
    pub sectors: Option<BTreeMap<String, MultipleRange>>,

    /// Replacement risk discount rate table, keyed by "low"/"medium"/"high"
    pub discount_rates: Option<BTreeMap<String, f64>>,
}

impl ValuationConfig {
    /// Resolve the lookup tables, applying any overrides
    pub fn lookup_tables(&self) -> Result<LookupTables, ValidationError> {
        let standard = LookupTables::standard();

        let sectors: Vec<(String, MultipleRange)> = match &self.sectors {
            Some(sectors) => sectors.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            None => standard
                .sectors()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        };

        let discount_rates: Vec<(RiskLevel, f64)> = match &self.discount_rates {
            Some(rates) => rates
                .iter()
                .map(|(level, rate)| {
                    level
                        .parse::<RiskLevel>()
                        .map(|level| (level, *rate))
                        .map_err(|_| ValidationError::UnknownRiskLevel(level.clone()))
                })
                .collect::<Result<_, _>>()?,
            None => standard.discount_rates().collect(),
        };

        Ok(LookupTables::new(sectors, discount_rates))
    }

    /// Build the valuation engine described by this configuration
    pub fn build_engine(&self) -> Result<ValuationEngine, ValidationError> {
        let tables = self.lookup_tables()?;
        Ok(ValuationEngine::new(tables, self.assumptions)?)
    }

    /// Validate valuation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.build_engine().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_build_standard_engine() {
        let config = ValuationConfig::default();
        let engine = config.build_engine().unwrap();
        assert_eq!(engine.tables(), &LookupTables::standard());
        assert_eq!(engine.assumptions(), &ValuationAssumptions::default());
    }

    #[test]
    fn test_sector_override_replaces_table() {
        let json = r#"{
            "sectors": { "Biotech": { "min": 10, "max": 14 } }
        }"#;
        let config: ValuationConfig = serde_json::from_str(json).unwrap();
        let tables = config.lookup_tables().unwrap();

        assert_eq!(tables.multiple_for("biotech").unwrap(), MultipleRange::new(10.0, 14.0));
        assert!(tables.multiple_for("saas").is_err());
        assert_eq!(tables.discount_rate_for(RiskLevel::High).unwrap(), 0.20);
    }

    #[test]
    fn test_discount_rate_override() {
        let json = r#"{
            "discount_rates": { "low": 0.08, "medium": 0.12, "high": 0.25 }
        }"#;
        let config: ValuationConfig = serde_json::from_str(json).unwrap();
        let tables = config.lookup_tables().unwrap();
        assert_eq!(tables.discount_rate_for(RiskLevel::High).unwrap(), 0.25);
    }

    #[test]
    fn test_unknown_risk_level_rejected() {
        let json = r#"{ "discount_rates": { "extreme": 0.4 } }"#;
        let config: ValuationConfig = serde_json::from_str(json).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnknownRiskLevel(level)) if level == "extreme"
        ));
    }

    #[test]
    fn test_degenerate_rate_rejected() {
        let json = r#"{
            "assumptions": { "terminal_growth_rate": 0.12 }
        }"#;
        let config: ValuationConfig = serde_json::from_str(json).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidValuationModel(_))
        ));
    }
}
