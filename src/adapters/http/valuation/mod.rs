//! Valuation HTTP adapter - REST API for business valuation.
//!
//! Stands in for the browser form: accepts the five raw fields, returns the
//! valuation with display-formatted amounts and the recommendation list.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ComputeValuationRequest, ErrorResponse, RangeResponse, ValuationResponse};
pub use handlers::{ValuationApiError, ValuationAppState};
pub use routes::valuation_routes;
