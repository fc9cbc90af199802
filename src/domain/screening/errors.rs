//! Screening-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId};

/// Errors raised while processing a screener submission.
///
/// Validation variants are client errors and always reach the caller with a
/// specific message; storage and scoring failures stay opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreeningError {
    /// The request carried no session id.
    MissingSessionId,
    /// The answers list was missing or empty.
    EmptyAnswers,
    /// An answer had a blank question id or an out-of-range value.
    InvalidAnswer,
    /// Catalog questions left unanswered, in catalog order.
    IncompleteAnswers { missing: Vec<QuestionId> },
    /// A submission already exists for this session.
    SessionAlreadySubmitted,
    /// Scoring could not be computed; cause is logged, not surfaced.
    ScoringFailed,
    /// Underlying storage failed.
    Storage(String),
}

impl ScreeningError {
    pub fn storage(message: impl Into<String>) -> Self {
        ScreeningError::Storage(message.into())
    }

    /// True for rejections the client can correct.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScreeningError::MissingSessionId
                | ScreeningError::EmptyAnswers
                | ScreeningError::InvalidAnswer
                | ScreeningError::IncompleteAnswers { .. }
                | ScreeningError::SessionAlreadySubmitted
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ScreeningError::MissingSessionId
            | ScreeningError::EmptyAnswers
            | ScreeningError::InvalidAnswer
            | ScreeningError::IncompleteAnswers { .. } => ErrorCode::ValidationFailed,
            ScreeningError::SessionAlreadySubmitted => ErrorCode::SessionAlreadySubmitted,
            ScreeningError::ScoringFailed => ErrorCode::ScoringFailed,
            ScreeningError::Storage(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ScreeningError::MissingSessionId => "Missing session_id".to_string(),
            ScreeningError::EmptyAnswers => "Answers must be a non-empty array".to_string(),
            ScreeningError::InvalidAnswer => {
                "Each answer must have a question_id and value between 0 and 4".to_string()
            }
            ScreeningError::IncompleteAnswers { missing } => {
                let ids: Vec<&str> = missing.iter().map(|id| id.as_str()).collect();
                format!("Missing answers for questions: {}", ids.join(", "))
            }
            ScreeningError::SessionAlreadySubmitted => {
                "This screener has already been completed. Please contact your clinician \
                 for further assistance."
                    .to_string()
            }
            ScreeningError::ScoringFailed => "Failed to calculate assessment results".to_string(),
            ScreeningError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for ScreeningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ScreeningError {}

impl From<DomainError> for ScreeningError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SessionAlreadySubmitted => ScreeningError::SessionAlreadySubmitted,
            ErrorCode::ScoringFailed => ScreeningError::ScoringFailed,
            _ => ScreeningError::Storage(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::QuestionId;

    #[test]
    fn validation_variants_are_client_errors() {
        assert!(ScreeningError::MissingSessionId.is_validation());
        assert!(ScreeningError::EmptyAnswers.is_validation());
        assert!(ScreeningError::InvalidAnswer.is_validation());
        assert!(ScreeningError::SessionAlreadySubmitted.is_validation());
        assert!(!ScreeningError::ScoringFailed.is_validation());
        assert!(!ScreeningError::storage("boom").is_validation());
    }

    #[test]
    fn incomplete_answers_lists_missing_ids_in_message() {
        let missing = vec![
            QuestionId::new("question_c").unwrap(),
            QuestionId::new("question_f").unwrap(),
        ];
        let err = ScreeningError::IncompleteAnswers { missing };
        assert_eq!(
            err.message(),
            "Missing answers for questions: question_c, question_f"
        );
    }

    #[test]
    fn duplicate_session_domain_error_converts_to_already_submitted() {
        let err = DomainError::new(ErrorCode::SessionAlreadySubmitted, "duplicate key");
        assert_eq!(
            ScreeningError::from(err),
            ScreeningError::SessionAlreadySubmitted
        );
    }

    #[test]
    fn database_domain_error_converts_to_storage() {
        let err = DomainError::new(ErrorCode::DatabaseError, "connection reset");
        let converted = ScreeningError::from(err);
        assert!(matches!(converted, ScreeningError::Storage(_)));
        assert!(!converted.is_validation());
    }

    #[test]
    fn scoring_failure_message_is_opaque() {
        assert_eq!(
            ScreeningError::ScoringFailed.message(),
            "Failed to calculate assessment results"
        );
    }
}
