//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own HTTP adapter; `api_routes` composes them into
//! the `/api` surface the binary serves.

pub mod answers;
pub mod error;
pub mod questions;
pub mod screener;

pub use answers::AnswerHandlers;
pub use questions::QuestionHandlers;
pub use screener::ScreenerHandlers;

use axum::Router;

/// Composes the API router from the feature routers.
pub fn api_routes(
    question_handlers: QuestionHandlers,
    answer_handlers: AnswerHandlers,
    screener_handlers: ScreenerHandlers,
) -> Router {
    Router::new()
        .nest("/questions", questions::question_routes(question_handlers))
        .nest("/answers", answers::answer_routes(answer_handlers))
        .nest("/screener", screener::screener_routes(screener_handlers))
}
