//! HTTP DTOs for question endpoints.

use serde::Serialize;

use crate::domain::screening::Question;

/// A catalog question as exposed over the API.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub question_id: String,
    pub title: String,
    pub domain: String,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            question_id: question.question_id().as_str().to_string(),
            title: question.title().to_string(),
            domain: question.domain().as_str().to_string(),
        }
    }
}
