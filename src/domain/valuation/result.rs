//! Combined valuation output.

use serde::{Deserialize, Serialize};

use super::range::ValuationRange;

/// The merged estimate plus each method's own range.
///
/// `low`/`high` are the extremes across the three sub-ranges. No top-level
/// average is produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub low: f64,
    pub high: f64,
    pub ebitda_valuation: ValuationRange,
    pub dcf_valuation: ValuationRange,
    pub comparables_valuation: ValuationRange,
}

impl ValuationResult {
    /// Builds a result, combining the sub-ranges' bounds.
    pub fn from_ranges(
        ebitda_valuation: ValuationRange,
        dcf_valuation: ValuationRange,
        comparables_valuation: ValuationRange,
    ) -> Self {
        let (low, high) =
            ValuationCombiner::combine(&[ebitda_valuation, dcf_valuation, comparables_valuation]);
        Self {
            low,
            high,
            ebitda_valuation,
            dcf_valuation,
            comparables_valuation,
        }
    }

    /// `(high - low) / low` as a percentage.
    ///
    /// Not guarded: a zero `low` yields infinity (or NaN when `high` is also
    /// zero).
    pub fn spread_percent(&self) -> f64 {
        ((self.high - self.low) / self.low) * 100.0
    }
}

/// Merges any number of estimate ranges into one low/high envelope.
pub struct ValuationCombiner;

impl ValuationCombiner {
    /// Returns the smallest `low` and the largest `high` among `ranges`.
    ///
    /// # Edge Cases
    /// - Empty input: returns `(0.0, 0.0)`
    pub fn combine(ranges: &[ValuationRange]) -> (f64, f64) {
        if ranges.is_empty() {
            return (0.0, 0.0);
        }

        let low = ranges.iter().map(|r| r.low).fold(f64::INFINITY, f64::min);
        let high = ranges.iter().map(|r| r.high).fold(f64::NEG_INFINITY, f64::max);
        (low, high)
    }
}

/// The single logical output of a valuation: numbers plus advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationReport {
    pub results: ValuationResult,
    pub recommendations: Vec<String>,
}
