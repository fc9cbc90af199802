//! HTTP handlers for question endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::screening::ListQuestionsHandler;

use super::dto::QuestionResponse;

#[derive(Clone)]
pub struct QuestionHandlers {
    list_handler: Arc<ListQuestionsHandler>,
}

impl QuestionHandlers {
    pub fn new(list_handler: Arc<ListQuestionsHandler>) -> Self {
        Self { list_handler }
    }
}

/// GET /api/questions - List the question catalog
pub async fn list_questions(State(handlers): State<QuestionHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(questions) => {
            let response: Vec<QuestionResponse> =
                questions.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(&e),
    }
}
