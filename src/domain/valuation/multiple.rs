//! EBITDA-multiple valuation.

use super::errors::ValuationError;
use super::estimator::{EstimationContext, ValuationEstimator};
use super::lookup::MultipleRange;
use super::range::ValuationRange;

/// Scales EBITDA by the sector's multiple bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct EbitdaMultipleEstimator;

impl EbitdaMultipleEstimator {
    /// Applies a multiple range to an EBITDA figure.
    ///
    /// Returns `{ ebitda * min, ebitda * max, ebitda * (min + max) / 2 }`.
    pub fn calculate(ebitda: f64, multiple: MultipleRange) -> ValuationRange {
        ValuationRange {
            low: ebitda * multiple.min,
            high: ebitda * multiple.max,
            average: ebitda * multiple.midpoint(),
        }
    }
}

impl ValuationEstimator for EbitdaMultipleEstimator {
    fn name(&self) -> &'static str {
        "ebitda_multiple"
    }

    fn estimate(&self, ctx: &EstimationContext<'_>) -> Result<ValuationRange, ValuationError> {
        let multiple = ctx.tables.multiple_for(&ctx.input.sector)?;
        Ok(Self::calculate(ctx.input.ebitda, multiple))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::valuation::{
        LookupTables, RiskLevel, ValidationError, ValuationAssumptions, ValuationInput,
    };
    use proptest::prelude::*;

    fn estimate(input: &ValuationInput) -> Result<ValuationRange, ValuationError> {
        let tables = LookupTables::standard();
        let assumptions = ValuationAssumptions::default();
        EbitdaMultipleEstimator.estimate(&EstimationContext::new(input, &tables, &assumptions))
    }

    #[test]
    fn saas_scenario_matches_expected_range() {
        let input = ValuationInput::new(10_000_000.0, 2_000_000.0, "saas", 15.0, RiskLevel::Low);
        let range = estimate(&input).unwrap();

        assert_eq!(range.low, 16_000_000.0);
        assert_eq!(range.high, 24_000_000.0);
        assert_eq!(range.average, 20_000_000.0);
    }

    #[test]
    fn zero_ebitda_gives_zero_range() {
        let input = ValuationInput::new(1_000.0, 0.0, "retail", 5.0, RiskLevel::Low);
        assert_eq!(estimate(&input).unwrap(), ValuationRange::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn unknown_sector_fails_with_named_sector() {
        let input = ValuationInput::new(1_000.0, 100.0, "mining", 5.0, RiskLevel::Low);
        assert_eq!(
            estimate(&input),
            Err(ValuationError::Validation(ValidationError::unknown_sector("mining")))
        );
    }

    proptest! {
        #[test]
        fn multiple_formulas_hold_for_every_sector(ebitda in 0.0f64..1.0e12) {
            let tables = LookupTables::standard();
            for (_, multiple) in tables.sectors() {
                let range = EbitdaMultipleEstimator::calculate(ebitda, *multiple);
                prop_assert_eq!(range.low, ebitda * multiple.min);
                prop_assert_eq!(range.high, ebitda * multiple.max);
                prop_assert_eq!(range.average, ebitda * ((multiple.min + multiple.max) / 2.0));
                prop_assert!(range.is_ordered());
            }
        }
    }
}
