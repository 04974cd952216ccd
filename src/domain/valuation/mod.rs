//! Valuation Module - Pure domain services for business valuation.
//!
//! Estimates an enterprise value range from revenue, EBITDA, sector, growth
//! rate and risk tier, then derives advisory recommendations.
//!
//! # Components
//!
//! - `LookupTables` - Sector EBITDA multiples and risk discount rates
//! - `EbitdaMultipleEstimator` - EBITDA scaled by the sector's multiple bounds
//! - `DcfEstimator` - Five-year projection plus perpetuity terminal value
//! - `ComparablesEstimator` - Placeholder widened from the multiple estimate
//! - `ValuationCombiner` - Low/high envelope across all estimates
//! - `RecommendationGenerator` - Ordered (predicate, message) rules
//! - `ValuationEngine` - Wires the above over injected tables
//!
//! All computation is synchronous and stateless. No ports or adapters needed.

mod assumptions;
mod comparables;
mod dcf;
mod engine;
mod errors;
mod estimator;
mod input;
mod lookup;
mod multiple;
mod range;
mod recommendation;
mod result;

pub use assumptions::{
    ValuationAssumptions, DEFAULT_FORECAST_YEARS, DEFAULT_TERMINAL_GROWTH_RATE,
    MAX_FORECAST_YEARS,
};
pub use comparables::ComparablesEstimator;
pub use dcf::{DcfEstimator, DcfProjection, ProjectedYear};
pub use engine::ValuationEngine;
pub use errors::{ConfigurationError, ValidationError, ValuationError};
pub use estimator::{EstimationContext, ValuationEstimator};
pub use input::{RiskLevel, ValuationInput};
pub use lookup::{LookupTables, MultipleRange};
pub use multiple::EbitdaMultipleEstimator;
pub use range::ValuationRange;
pub use recommendation::{
    Recommendation, RecommendationGenerator, RecommendationKind, RecommendationRule,
    RulePredicate, LOW_GROWTH_THRESHOLD, LOW_MARGIN_THRESHOLD, WIDE_SPREAD_THRESHOLD,
};
pub use result::{ValuationCombiner, ValuationReport, ValuationResult};
