//! HTTP routes for question endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_questions, QuestionHandlers};

/// Creates the questions router.
pub fn question_routes(handlers: QuestionHandlers) -> Router {
    Router::new()
        .route("/", get(list_questions))
        .with_state(handlers)
}
