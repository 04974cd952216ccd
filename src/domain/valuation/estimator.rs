//! Common contract for valuation estimators.

use super::assumptions::ValuationAssumptions;
use super::errors::ValuationError;
use super::input::ValuationInput;
use super::lookup::LookupTables;
use super::range::ValuationRange;

/// Everything an estimator may read while producing a range.
#[derive(Debug, Clone, Copy)]
pub struct EstimationContext<'a> {
    pub input: &'a ValuationInput,
    pub tables: &'a LookupTables,
    pub assumptions: &'a ValuationAssumptions,
}

impl<'a> EstimationContext<'a> {
    pub fn new(
        input: &'a ValuationInput,
        tables: &'a LookupTables,
        assumptions: &'a ValuationAssumptions,
    ) -> Self {
        Self {
            input,
            tables,
            assumptions,
        }
    }
}

/// A valuation method producing a [`ValuationRange`].
///
/// Estimators are pure: the same context always yields the same range.
pub trait ValuationEstimator: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Computes the estimate for the given context.
    fn estimate(&self, ctx: &EstimationContext<'_>) -> Result<ValuationRange, ValuationError>;
}
