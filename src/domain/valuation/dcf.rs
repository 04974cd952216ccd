//! Discounted-cash-flow valuation.
//!
//! Grown EBITDA is used directly as each year's cash flow. There is no capex,
//! tax or working-capital adjustment.

use serde::{Deserialize, Serialize};

use super::errors::ValuationError;
use super::estimator::{EstimationContext, ValuationEstimator};
use super::lookup::check_discount_rate;
use super::range::ValuationRange;

/// One year of the explicit forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedYear {
    /// 1-based forecast year.
    pub year: u32,
    /// EBITDA after applying growth for this year.
    pub ebitda: f64,
    /// `(1 + rate)^year`.
    pub discount_factor: f64,
    /// `ebitda / discount_factor`.
    pub present_value: f64,
}

/// Full DCF working for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcfProjection {
    pub discount_rate: f64,
    pub years: Vec<ProjectedYear>,
    /// Sum of the yearly present values, terminal value excluded.
    pub present_value: f64,
    pub terminal_value: f64,
    pub discounted_terminal_value: f64,
}

impl DcfProjection {
    /// Present value including the discounted terminal value.
    pub fn enterprise_value(&self) -> f64 {
        self.present_value + self.discounted_terminal_value
    }

    /// Collapses the projection into a range.
    ///
    /// `low` is the haircut sum of yearly values only; `high` adds the
    /// terminal value; `average` is the mean of the undiscounted-low and high.
    pub fn to_range(&self, low_haircut: f64) -> ValuationRange {
        let high = self.enterprise_value();
        ValuationRange {
            low: self.present_value * low_haircut,
            high,
            average: (self.present_value + high) / 2.0,
        }
    }
}

/// Five-year EBITDA projection plus a growing-perpetuity terminal value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DcfEstimator;

impl DcfEstimator {
    /// Builds the year-by-year projection for the context's input.
    ///
    /// Fails with a configuration error when the assumptions are out of range
    /// or the discount rate does not exceed the terminal growth rate.
    pub fn project(&self, ctx: &EstimationContext<'_>) -> Result<DcfProjection, ValuationError> {
        ctx.assumptions.validate()?;

        let input = ctx.input;
        let terminal_growth = ctx.assumptions.terminal_growth_rate;

        let rate = ctx.tables.discount_rate_for(input.risk_level)?;
        check_discount_rate(input.risk_level, rate, terminal_growth)?;

        let growth = 1.0 + input.growth_rate / 100.0;
        let horizon = ctx.assumptions.forecast_years;

        let mut current = input.ebitda;
        let mut present_value = 0.0;
        let mut years = Vec::with_capacity(horizon as usize);

        for year in 1..=horizon {
            current *= growth;
            let discount_factor = (1.0 + rate).powi(year as i32);
            let year_value = current / discount_factor;
            present_value += year_value;
            years.push(ProjectedYear {
                year,
                ebitda: current,
                discount_factor,
                present_value: year_value,
            });
        }

        let terminal_value = (current * (1.0 + terminal_growth)) / (rate - terminal_growth);
        let discounted_terminal_value = terminal_value / (1.0 + rate).powi(horizon as i32);

        Ok(DcfProjection {
            discount_rate: rate,
            years,
            present_value,
            terminal_value,
            discounted_terminal_value,
        })
    }
}

impl ValuationEstimator for DcfEstimator {
    fn name(&self) -> &'static str {
        "dcf"
    }

    fn estimate(&self, ctx: &EstimationContext<'_>) -> Result<ValuationRange, ValuationError> {
        let projection = self.project(ctx)?;
        Ok(projection.to_range(ctx.assumptions.dcf_low_haircut))
    }
}
