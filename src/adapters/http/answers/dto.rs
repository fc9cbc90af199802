//! HTTP DTOs for answer endpoints.
//!
//! These types decouple the HTTP API from domain types. Missing `session_id`
//! or `answers` fields deserialize to their empty defaults so the coordinator
//! rejects them with its specific validation messages instead of a generic
//! body-parse failure.

use serde::{Deserialize, Serialize};

use crate::application::handlers::screening::{
    ProcessSubmissionCommand, RawAnswer, SubmissionOutcome,
};
use crate::ports::AnswerRecord;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One answer in a submission request.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerInput {
    #[serde(default)]
    pub question_id: String,
    pub value: i64,
}

/// Request to submit a completed screener.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswersRequest {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub answers: Vec<AnswerInput>,
    #[serde(default)]
    pub clinician_notes: Option<String>,
}

impl From<SubmitAnswersRequest> for ProcessSubmissionCommand {
    fn from(req: SubmitAnswersRequest) -> Self {
        Self {
            session_id: req.session_id,
            answers: req
                .answers
                .into_iter()
                .map(|a| RawAnswer {
                    question_id: a.question_id,
                    value: a.value,
                })
                .collect(),
            clinician_notes: req.clinician_notes,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a processed submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub message: String,
    pub submission_id: String,
    pub results: Vec<String>,
}

impl From<SubmissionOutcome> for SubmissionResponse {
    fn from(outcome: SubmissionOutcome) -> Self {
        Self {
            message: "Screener processed successfully".to_string(),
            submission_id: outcome.submission_id.to_string(),
            results: outcome.results,
        }
    }
}

/// A persisted answer row as exposed over the API.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerRecordResponse {
    pub id: i64,
    pub submission_id: String,
    pub question_id: String,
    pub value: i32,
    pub created_at: String,
}

impl From<AnswerRecord> for AnswerRecordResponse {
    fn from(record: AnswerRecord) -> Self {
        Self {
            id: record.id,
            submission_id: record.submission_id.to_string(),
            question_id: record.question_id.as_str().to_string(),
            value: record.value,
            created_at: record.created_at.as_datetime().to_rfc3339(),
        }
    }
}
