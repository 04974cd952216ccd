//! Comparables valuation.
//!
//! No comparable-transactions source exists yet, so the range is widened from
//! the EBITDA-multiple estimate.

use super::errors::ValuationError;
use super::estimator::{EstimationContext, ValuationEstimator};
use super::multiple::EbitdaMultipleEstimator;
use super::range::ValuationRange;

/// Placeholder comparables estimate derived from the sector multiple.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparablesEstimator;

impl ComparablesEstimator {
    /// Widens a multiple-based range: low and high are scaled, average is kept.
    pub fn from_multiple(
        multiple: &ValuationRange,
        low_factor: f64,
        high_factor: f64,
    ) -> ValuationRange {
        ValuationRange {
            low: multiple.low * low_factor,
            high: multiple.high * high_factor,
            average: multiple.average,
        }
    }
}

impl ValuationEstimator for ComparablesEstimator {
    fn name(&self) -> &'static str {
        "comparables"
    }

    fn estimate(&self, ctx: &EstimationContext<'_>) -> Result<ValuationRange, ValuationError> {
        let multiple = EbitdaMultipleEstimator.estimate(ctx)?;
        Ok(Self::from_multiple(
            &multiple,
            ctx.assumptions.comparables_low_factor,
            ctx.assumptions.comparables_high_factor,
        ))
    }
}
