//! HTTP handlers for the screener content endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::screening::GetScreenerHandler;

#[derive(Clone)]
pub struct ScreenerHandlers {
    get_handler: Arc<GetScreenerHandler>,
}

impl ScreenerHandlers {
    pub fn new(get_handler: Arc<GetScreenerHandler>) -> Self {
        Self { get_handler }
    }
}

/// GET /api/screener - Fetch the screener display document
pub async fn get_screener(State(handlers): State<ScreenerHandlers>) -> Response {
    match handlers.get_handler.handle().await {
        Ok(document) => (StatusCode::OK, Json(document)).into_response(),
        Err(e) => domain_error_response(&e),
    }
}
