//! Business Valuation - Valuation range estimator
//!
//! This crate estimates a business's value range from revenue, EBITDA, sector,
//! growth rate and risk level using an EBITDA multiple, a discounted cash flow
//! and a comparables placeholder, and derives advisory recommendations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
