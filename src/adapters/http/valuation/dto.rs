//! Data transfer objects for valuation HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::valuation::{ComputeValuationCommand, ComputeValuationResult};
use crate::domain::foundation::{DomainError, Usd};
use crate::domain::valuation::ValuationRange;

pub use crate::application::handlers::valuation::ValuationTablesView;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to value a business.
///
/// Accepts both snake_case and the camelCase names used by browser forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeValuationRequest {
    /// Annual revenue in dollars
    pub revenue: f64,
    /// Annual EBITDA in dollars
    pub ebitda: f64,
    /// Sector key (e.g. "saas")
    pub sector: String,
    /// Expected growth in percent per year
    #[serde(alias = "growthRate")]
    pub growth_rate: f64,
    /// "low", "medium" or "high"
    #[serde(alias = "riskLevel")]
    pub risk_level: String,
}

impl From<ComputeValuationRequest> for ComputeValuationCommand {
    fn from(request: ComputeValuationRequest) -> Self {
        Self {
            revenue: request.revenue,
            ebitda: request.ebitda,
            sector: request.sector,
            growth_rate: request.growth_rate,
            risk_level: request.risk_level,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One estimator's range with display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeResponse {
    pub low: f64,
    pub high: f64,
    pub average: f64,
    pub low_formatted: String,
    pub high_formatted: String,
    pub average_formatted: String,
}

impl From<ValuationRange> for RangeResponse {
    fn from(range: ValuationRange) -> Self {
        Self {
            low: range.low,
            high: range.high,
            average: range.average,
            low_formatted: Usd::new(range.low).to_string(),
            high_formatted: Usd::new(range.high).to_string(),
            average_formatted: Usd::new(range.average).to_string(),
        }
    }
}

/// Response for a computed valuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationResponse {
    pub low: f64,
    pub high: f64,
    pub low_formatted: String,
    pub high_formatted: String,
    pub ebitda_valuation: RangeResponse,
    pub dcf_valuation: RangeResponse,
    pub comparables_valuation: RangeResponse,
    pub recommendations: Vec<String>,
    pub computed_at: String,
}

impl From<ComputeValuationResult> for ValuationResponse {
    fn from(result: ComputeValuationResult) -> Self {
        let results = result.report.results;
        Self {
            low: results.low,
            high: results.high,
            low_formatted: Usd::new(results.low).to_string(),
            high_formatted: Usd::new(results.high).to_string(),
            ebitda_valuation: results.ebitda_valuation.into(),
            dcf_valuation: results.dcf_valuation.into(),
            comparables_valuation: results.comparables_valuation.into(),
            recommendations: result.report.recommendations,
            computed_at: result.computed_at.to_rfc3339(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            details,
            ..Self::new(err.code.to_string(), err.message.clone())
        }
    }
}
