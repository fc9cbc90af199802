//! HTTP handlers for answer endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::{domain_error_response, screening_error_response};
use crate::application::handlers::screening::{ListAnswersHandler, ProcessSubmissionHandler};

use super::dto::{AnswerRecordResponse, SubmissionResponse, SubmitAnswersRequest};

#[derive(Clone)]
pub struct AnswerHandlers {
    process_handler: Arc<ProcessSubmissionHandler>,
    list_handler: Arc<ListAnswersHandler>,
}

impl AnswerHandlers {
    pub fn new(
        process_handler: Arc<ProcessSubmissionHandler>,
        list_handler: Arc<ListAnswersHandler>,
    ) -> Self {
        Self {
            process_handler,
            list_handler,
        }
    }
}

/// POST /api/answers - Submit a completed screener
pub async fn submit_answers(
    State(handlers): State<AnswerHandlers>,
    Json(req): Json<SubmitAnswersRequest>,
) -> Response {
    match handlers.process_handler.handle(req.into()).await {
        Ok(outcome) => {
            let response: SubmissionResponse = outcome.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => screening_error_response(&e),
    }
}

/// GET /api/answers - List persisted answers
pub async fn list_answers(State(handlers): State<AnswerHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(records) => {
            let response: Vec<AnswerRecordResponse> =
                records.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(&e),
    }
}
