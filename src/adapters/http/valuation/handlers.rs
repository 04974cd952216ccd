//! HTTP handlers for valuation endpoints.
//!
//! These handlers connect Axum routes to the valuation command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::valuation::{
    ComputeValuationHandler, GetValuationTablesHandler,
};
use crate::domain::foundation::DomainError;
use crate::domain::valuation::ValuationEngine;

use super::dto::{ComputeValuationRequest, ErrorResponse, ValuationResponse, ValuationTablesView};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for valuation endpoints.
#[derive(Clone)]
pub struct ValuationAppState {
    pub engine: Arc<ValuationEngine>,
}

impl ValuationAppState {
    pub fn new(engine: ValuationEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    pub fn compute_valuation_handler(&self) -> ComputeValuationHandler {
        ComputeValuationHandler::new(self.engine.clone())
    }

    pub fn get_tables_handler(&self) -> GetValuationTablesHandler {
        GetValuationTablesHandler::new(self.engine.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/valuations - Value a business
pub async fn compute_valuation(
    State(state): State<ValuationAppState>,
    Json(request): Json<ComputeValuationRequest>,
) -> Result<impl IntoResponse, ValuationApiError> {
    let handler = state.compute_valuation_handler();
    let result = handler.handle(request.into())?;

    Ok((StatusCode::OK, Json(ValuationResponse::from(result))))
}

/// GET /api/valuations/tables - Sectors, risk tiers and model assumptions
pub async fn get_valuation_tables(
    State(state): State<ValuationAppState>,
) -> Json<ValuationTablesView> {
    Json(state.get_tables_handler().handle())
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct ValuationApiError(DomainError);

impl From<DomainError> for ValuationApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ValuationApiError {
    fn into_response(self) -> axum::response::Response {
        let status = if self.0.code.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}
