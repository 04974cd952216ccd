//! ComputeValuationHandler - Command handler for valuing a business.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::domain::foundation::DomainError;
use crate::domain::valuation::{
    RiskLevel, ValuationEngine, ValuationError, ValuationInput, ValuationReport,
};

/// Command carrying the raw fields collected by the UI.
#[derive(Debug, Clone)]
pub struct ComputeValuationCommand {
    pub revenue: f64,
    pub ebitda: f64,
    pub sector: String,
    pub growth_rate: f64,
    pub risk_level: String,
}

impl ComputeValuationCommand {
    /// Parses the command into a domain input record.
    pub fn to_input(&self) -> Result<ValuationInput, DomainError> {
        let risk_level: RiskLevel = self
            .risk_level
            .parse()
            .map_err(|e| DomainError::from(ValuationError::from(e)))?;

        Ok(ValuationInput::new(
            self.revenue,
            self.ebitda,
            self.sector.clone(),
            self.growth_rate,
            risk_level,
        ))
    }
}

/// Result of a successful valuation.
#[derive(Debug, Clone)]
pub struct ComputeValuationResult {
    pub input: ValuationInput,
    pub report: ValuationReport,
    pub computed_at: DateTime<Utc>,
}

/// Handler for valuation requests.
pub struct ComputeValuationHandler {
    engine: Arc<ValuationEngine>,
}

impl ComputeValuationHandler {
    pub fn new(engine: Arc<ValuationEngine>) -> Self {
        Self { engine }
    }

    pub fn handle(
        &self,
        cmd: ComputeValuationCommand,
    ) -> Result<ComputeValuationResult, DomainError> {
        // 1. Parse raw fields
        let input = cmd.to_input()?;

        // 2. Value and derive recommendations
        let report = self.engine.compute_valuation(&input).map_err(|e| {
            warn!(sector = %input.sector, error = %e, "Valuation failed");
            DomainError::from(e)
        })?;

        info!(
            sector = %input.sector,
            risk_level = %input.risk_level,
            low = report.results.low,
            high = report.results.high,
            "Valuation computed"
        );

        Ok(ComputeValuationResult {
            input,
            report,
            computed_at: Utc::now(),
        })
    }
}
