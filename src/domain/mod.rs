//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `valuation` - Pure valuation estimators and recommendation rules

pub mod foundation;
pub mod valuation;
