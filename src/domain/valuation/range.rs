//! Estimate interval produced by every estimator.

use serde::{Deserialize, Serialize};

/// A low/high estimate interval with a point estimate.
///
/// `low <= average <= high` is expected but not enforced; the DCF low bound is
/// a haircut of a different quantity than its high bound.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValuationRange {
    pub low: f64,
    pub high: f64,
    pub average: f64,
}

impl ValuationRange {
    /// Creates a range from its three components.
    pub fn new(low: f64, high: f64, average: f64) -> Self {
        Self { low, high, average }
    }

    /// Width of the interval.
    pub fn spread(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true when the point estimate lies within the interval.
    pub fn is_ordered(&self) -> bool {
        self.low <= self.average && self.average <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_is_high_minus_low() {
        let range = ValuationRange::new(16.0, 24.0, 20.0);
        assert_eq!(range.spread(), 8.0);
    }

    #[test]
    fn is_ordered_detects_out_of_band_average() {
        assert!(ValuationRange::new(1.0, 3.0, 2.0).is_ordered());
        assert!(!ValuationRange::new(1.0, 3.0, 4.0).is_ordered());
    }

    #[test]
    fn range_serializes_fields() {
        let json = serde_json::to_value(ValuationRange::new(1.0, 3.0, 2.0)).unwrap();
        assert_eq!(json["low"], 1.0);
        assert_eq!(json["high"], 3.0);
        assert_eq!(json["average"], 2.0);
    }
}
