//! Configuration error types

use thiserror::Error;

use crate::domain::valuation::ValuationError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Unknown risk level in discount rate table: {0}")]
    UnknownRiskLevel(String),

    #[error("Invalid valuation model: {0}")]
    InvalidValuationModel(#[from] ValuationError),
}
