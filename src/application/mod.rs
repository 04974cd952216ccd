//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations for the adapters.

pub mod handlers;

pub use handlers::valuation::{
    ComputeValuationCommand, ComputeValuationHandler, ComputeValuationResult,
    GetValuationTablesHandler, ValuationTablesView,
};
