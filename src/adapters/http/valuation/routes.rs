//! Axum router configuration for valuation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{compute_valuation, get_valuation_tables, ValuationAppState};

/// Create the valuation API router.
///
/// # Routes
///
/// - `POST /` - Value a business from revenue, EBITDA, sector, growth and risk
/// - `GET /tables` - Sector multiples, risk discount rates and assumptions
///
/// Suitable for mounting at `/api/valuations`.
pub fn valuation_routes() -> Router<ValuationAppState> {
    Router::new()
        .route("/", post(compute_valuation))
        .route("/tables", get(get_valuation_tables))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_defined() {
        let _router = valuation_routes();
    }
}
