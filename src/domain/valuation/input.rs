//! Valuation input record and risk tiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ValidationError;

/// Risk tier of the business, mapped to a discount rate by the lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// All tiers, lowest risk first.
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// Returns the wire name of this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(ValidationError::unknown_risk_level(s)),
        }
    }
}

/// Financial inputs for a single valuation.
///
/// `growth_rate` is a percentage per year (`5.0` means 5%). The sector is a key
/// into the industry multiple table and is resolved by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationInput {
    pub revenue: f64,
    pub ebitda: f64,
    pub sector: String,
    pub growth_rate: f64,
    pub risk_level: RiskLevel,
}

impl ValuationInput {
    /// Creates a new input record.
    pub fn new(
        revenue: f64,
        ebitda: f64,
        sector: impl Into<String>,
        growth_rate: f64,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            revenue,
            ebitda,
            sector: sector.into(),
            growth_rate,
            risk_level,
        }
    }

    /// EBITDA as a percentage of revenue.
    pub fn ebitda_margin(&self) -> f64 {
        (self.ebitda / self.revenue) * 100.0
    }

    /// Rejects non-finite numbers, non-positive revenue and negative EBITDA.
    ///
    /// Sector and risk level are checked against the lookup tables by the engine.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("revenue", self.revenue),
            ("ebitda", self.ebitda),
            ("growth_rate", self.growth_rate),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field });
            }
        }

        if self.revenue <= 0.0 {
            return Err(ValidationError::NonPositiveRevenue {
                value: self.revenue,
            });
        }
        if self.ebitda < 0.0 {
            return Err(ValidationError::Negative {
                field: "ebitda",
                value: self.ebitda,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ValuationInput {
        ValuationInput::new(10_000_000.0, 2_000_000.0, "saas", 15.0, RiskLevel::Medium)
    }

    #[test]
    fn risk_level_parses_case_insensitively() {
        assert_eq!("low".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
        assert_eq!(" Medium ".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
        assert_eq!("HIGH".parse::<RiskLevel>().unwrap(), RiskLevel::High);
    }

    #[test]
    fn risk_level_rejects_unknown_tier() {
        let err = "extreme".parse::<RiskLevel>().unwrap_err();
        assert_eq!(err, ValidationError::unknown_risk_level("extreme"));
    }

    #[test]
    fn risk_level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
        let level: RiskLevel = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(level, RiskLevel::Medium);
    }

    #[test]
    fn ebitda_margin_is_percentage_of_revenue() {
        assert!((input().ebitda_margin() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn validate_accepts_typical_input() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn validate_accepts_zero_ebitda_and_negative_growth() {
        let mut i = input();
        i.ebitda = 0.0;
        i.growth_rate = -5.0;
        assert!(i.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_revenue() {
        let mut i = input();
        i.revenue = 0.0;
        assert_eq!(
            i.validate(),
            Err(ValidationError::NonPositiveRevenue { value: 0.0 })
        );
    }

    #[test]
    fn validate_rejects_negative_ebitda() {
        let mut i = input();
        i.ebitda = -1.0;
        assert!(matches!(
            i.validate(),
            Err(ValidationError::Negative { field: "ebitda", .. })
        ));
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let mut i = input();
        i.growth_rate = f64::NAN;
        assert_eq!(
            i.validate(),
            Err(ValidationError::NonFinite { field: "growth_rate" })
        );

        let mut i = input();
        i.revenue = f64::INFINITY;
        assert_eq!(
            i.validate(),
            Err(ValidationError::NonFinite { field: "revenue" })
        );
    }
}
