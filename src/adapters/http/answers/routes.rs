//! HTTP routes for answer endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_answers, submit_answers, AnswerHandlers};

/// Creates the answers router.
pub fn answer_routes(handlers: AnswerHandlers) -> Router {
    Router::new()
        .route("/", get(list_answers))
        .route("/", post(submit_answers))
        .with_state(handlers)
}
