//! Valuation handlers.
//!
//! - `ComputeValuationHandler` - values a business and attaches recommendations
//! - `GetValuationTablesHandler` - exposes the active lookup tables

mod compute_valuation;
mod get_valuation_tables;

pub use compute_valuation::{
    ComputeValuationCommand, ComputeValuationHandler, ComputeValuationResult,
};
pub use get_valuation_tables::{
    GetValuationTablesHandler, RiskDiscountRate, SectorMultiples, ValuationTablesView,
};
