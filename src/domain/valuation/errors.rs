//! Errors raised by the valuation engine.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Rejected caller input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Unknown sector '{sector}'")]
    UnknownSector { sector: String },

    #[error("Unknown risk level '{risk_level}'")]
    UnknownRiskLevel { risk_level: String },

    #[error("Field '{field}' must be a finite number")]
    NonFinite { field: &'static str },

    #[error("Field '{field}' cannot be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("Revenue must be positive, got {value}")]
    NonPositiveRevenue { value: f64 },
}

impl ValidationError {
    /// Creates an unknown sector error.
    pub fn unknown_sector(sector: impl Into<String>) -> Self {
        ValidationError::UnknownSector {
            sector: sector.into(),
        }
    }

    /// Creates an unknown risk level error.
    pub fn unknown_risk_level(risk_level: impl Into<String>) -> Self {
        ValidationError::UnknownRiskLevel {
            risk_level: risk_level.into(),
        }
    }
}

/// Lookup tables or assumptions that cannot produce a valuation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error(
        "Discount rate {rate} for risk level '{risk_level}' must exceed terminal growth rate {terminal_growth}"
    )]
    DegenerateDiscountRate {
        risk_level: String,
        rate: f64,
        terminal_growth: f64,
    },

    #[error("Invalid multiple range for sector '{sector}': min {min}, max {max}")]
    InvalidMultipleRange { sector: String, min: f64, max: f64 },

    #[error("Industry multiple table is empty")]
    EmptyMultipleTable,

    #[error("Invalid valuation assumption '{name}': {value}")]
    InvalidAssumption { name: &'static str, value: f64 },
}

/// Any failure of the valuation pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValuationError {
    #[error("Invalid valuation input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid valuation configuration: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl From<ValuationError> for DomainError {
    fn from(err: ValuationError) -> Self {
        let message = err.to_string();
        match err {
            ValuationError::Validation(ValidationError::UnknownSector { sector }) => {
                DomainError::new(ErrorCode::UnknownSector, message).with_detail("sector", sector)
            }
            ValuationError::Validation(ValidationError::UnknownRiskLevel { risk_level }) => {
                DomainError::new(ErrorCode::UnknownRiskLevel, message)
                    .with_detail("risk_level", risk_level)
            }
            ValuationError::Validation(ValidationError::NonFinite { field })
            | ValuationError::Validation(ValidationError::Negative { field, .. }) => {
                DomainError::validation(field, message)
            }
            ValuationError::Validation(ValidationError::NonPositiveRevenue { .. }) => {
                DomainError::validation("revenue", message)
            }
            ValuationError::Configuration(_) => {
                DomainError::new(ErrorCode::ConfigurationError, message)
            }
        }
    }
}
