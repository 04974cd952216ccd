//! Adapters - Implementations connecting the application to the outside world.
//!
//! - `http` - Axum REST API standing in for the valuation form

pub mod http;
