//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! valuation domain.

mod errors;
mod usd;

pub use errors::{DomainError, ErrorCode};
pub use usd::Usd;
