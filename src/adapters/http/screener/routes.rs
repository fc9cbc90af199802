//! HTTP routes for the screener content endpoint.

use axum::{routing::get, Router};

use super::handlers::{get_screener, ScreenerHandlers};

/// Creates the screener router.
pub fn screener_routes(handlers: ScreenerHandlers) -> Router {
    Router::new()
        .route("/", get(get_screener))
        .with_state(handlers)
}
