//! Answer reader port (read side).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, QuestionId, SubmissionId, Timestamp};

/// Persisted answer row, as exposed to the read-side listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub id: i64,
    pub submission_id: SubmissionId,
    pub question_id: QuestionId,
    pub value: i32,
    pub created_at: Timestamp,
}

/// Read port over persisted answers.
#[async_trait]
pub trait AnswerReader: Send + Sync {
    /// Lists all answers, newest first.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on storage failure
    async fn list_all(&self) -> Result<Vec<AnswerRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn AnswerReader) {}
    }
}
