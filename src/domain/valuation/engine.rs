//! Valuation engine: runs the estimators and the recommendation rules.

use tracing::debug;

use super::assumptions::ValuationAssumptions;
use super::comparables::ComparablesEstimator;
use super::dcf::{DcfEstimator, DcfProjection};
use super::errors::ValuationError;
use super::estimator::{EstimationContext, ValuationEstimator};
use super::input::ValuationInput;
use super::lookup::LookupTables;
use super::multiple::EbitdaMultipleEstimator;
use super::range::ValuationRange;
use super::recommendation::RecommendationGenerator;
use super::result::{ValuationReport, ValuationResult};

/// Computes valuations against an injected set of lookup tables.
///
/// The engine holds only immutable data and can be shared across threads.
#[derive(Debug, Clone)]
pub struct ValuationEngine {
    tables: LookupTables,
    assumptions: ValuationAssumptions,
    recommendations: RecommendationGenerator,
}

impl ValuationEngine {
    /// Creates an engine after checking that tables and assumptions are usable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty or inverted multiple table,
    /// invalid assumptions, or a discount rate not above terminal growth.
    pub fn new(
        tables: LookupTables,
        assumptions: ValuationAssumptions,
    ) -> Result<Self, ValuationError> {
        assumptions.validate()?;
        tables.validate(assumptions.terminal_growth_rate)?;
        Ok(Self {
            tables,
            assumptions,
            recommendations: RecommendationGenerator::standard(),
        })
    }

    /// Engine over the built-in tables and default assumptions.
    pub fn standard() -> Self {
        Self {
            tables: LookupTables::standard(),
            assumptions: ValuationAssumptions::default(),
            recommendations: RecommendationGenerator::standard(),
        }
    }

    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    pub fn assumptions(&self) -> &ValuationAssumptions {
        &self.assumptions
    }

    /// Runs the three estimators and merges their ranges.
    pub fn value(&self, input: &ValuationInput) -> Result<ValuationResult, ValuationError> {
        if let Err(err) = input.validate() {
            debug!(sector = %input.sector, error = %err, "Rejected valuation input");
            return Err(err.into());
        }

        let ctx = EstimationContext::new(input, &self.tables, &self.assumptions);

        let ebitda_valuation = run(&EbitdaMultipleEstimator, &ctx)?;
        let dcf_valuation = run(&DcfEstimator, &ctx)?;
        let comparables_valuation = run(&ComparablesEstimator, &ctx)?;

        Ok(ValuationResult::from_ranges(
            ebitda_valuation,
            dcf_valuation,
            comparables_valuation,
        ))
    }

    /// Year-by-year DCF working for an input.
    pub fn dcf_projection(&self, input: &ValuationInput) -> Result<DcfProjection, ValuationError> {
        input.validate()?;
        DcfEstimator.project(&EstimationContext::new(input, &self.tables, &self.assumptions))
    }

    /// Values the business and derives recommendations from the result.
    pub fn compute_valuation(
        &self,
        input: &ValuationInput,
    ) -> Result<ValuationReport, ValuationError> {
        let results = self.value(input)?;
        let recommendations = self.recommendations.generate(input, &results);

        debug!(
            sector = %input.sector,
            risk_level = %input.risk_level,
            low = results.low,
            high = results.high,
            recommendations = recommendations.len(),
            "Computed valuation"
        );

        Ok(ValuationReport {
            results,
            recommendations,
        })
    }
}

impl Default for ValuationEngine {
    fn default() -> Self {
        Self::standard()
    }
}

fn run(
    estimator: &dyn ValuationEstimator,
    ctx: &EstimationContext<'_>,
) -> Result<ValuationRange, ValuationError> {
    let range = estimator.estimate(ctx)?;
    debug!(
        estimator = estimator.name(),
        low = range.low,
        high = range.high,
        average = range.average,
        "Estimated range"
    );
    Ok(range)
}
