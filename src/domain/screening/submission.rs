//! Submission aggregate and answer value types.

use crate::domain::foundation::{QuestionId, SubmissionId, Timestamp, ValidationError};

/// Inclusive bounds for a screener answer value.
pub const ANSWER_VALUE_MIN: i64 = 0;
pub const ANSWER_VALUE_MAX: i64 = 4;

/// Validated answer value in [0, 4].
///
/// Construction is the only way to obtain one, so any `AnswerValue` that
/// reaches persistence or scoring is already in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerValue(i32);

impl AnswerValue {
    /// Validates and wraps a raw value.
    pub fn new(raw: i64) -> Result<Self, ValidationError> {
        if !(ANSWER_VALUE_MIN..=ANSWER_VALUE_MAX).contains(&raw) {
            return Err(ValidationError::out_of_range(
                "value",
                ANSWER_VALUE_MIN,
                ANSWER_VALUE_MAX,
                raw,
            ));
        }
        Ok(Self(raw as i32))
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

/// A validated answer pairing a catalog question with its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    question_id: QuestionId,
    value: AnswerValue,
}

impl NewAnswer {
    pub fn new(question_id: QuestionId, value: AnswerValue) -> Self {
        Self { question_id, value }
    }

    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    pub fn value(&self) -> AnswerValue {
        self.value
    }
}

/// One completed questionnaire attempt tied to a session.
///
/// Created exactly once per session inside the persist transaction and never
/// mutated afterwards. Its answers are owned exclusively (cascade delete is a
/// storage concern).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    id: SubmissionId,
    session_id: String,
    created_at: Timestamp,
    clinician_notes: Option<String>,
}

impl Submission {
    /// Creates a new submission for a session, rejecting an empty session id.
    pub fn new(
        session_id: impl Into<String>,
        clinician_notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        let session_id = session_id.into();
        if session_id.is_empty() {
            return Err(ValidationError::empty_field("session_id"));
        }
        Ok(Self {
            id: SubmissionId::new(),
            session_id,
            created_at: Timestamp::now(),
            clinician_notes,
        })
    }

    /// Rebuilds a submission from persisted state.
    pub fn reconstitute(
        id: SubmissionId,
        session_id: String,
        created_at: Timestamp,
        clinician_notes: Option<String>,
    ) -> Self {
        Self {
            id,
            session_id,
            created_at,
            clinician_notes,
        }
    }

    pub fn id(&self) -> &SubmissionId {
        &self.id
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn clinician_notes(&self) -> Option<&str> {
        self.clinician_notes.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_value_accepts_full_range() {
        for raw in 0..=4 {
            let value = AnswerValue::new(raw).unwrap();
            assert_eq!(value.as_i32() as i64, raw);
        }
    }

    #[test]
    fn answer_value_rejects_out_of_range() {
        assert!(AnswerValue::new(-1).is_err());
        assert!(AnswerValue::new(5).is_err());
        assert!(AnswerValue::new(100).is_err());
    }

    #[test]
    fn submission_generates_id_and_timestamp() {
        let submission = Submission::new("session-abc", None).unwrap();
        assert_eq!(submission.session_id(), "session-abc");
        assert!(submission.clinician_notes().is_none());

        let other = Submission::new("session-abc", None).unwrap();
        assert_ne!(submission.id(), other.id());
    }

    #[test]
    fn submission_rejects_empty_session_id() {
        assert!(Submission::new("", None).is_err());
    }

    #[test]
    fn submission_keeps_clinician_notes() {
        let submission =
            Submission::new("session-abc", Some("flagged for follow-up".to_string())).unwrap();
        assert_eq!(submission.clinician_notes(), Some("flagged for follow-up"));
    }

    #[test]
    fn reconstitute_preserves_all_fields() {
        let id = SubmissionId::new();
        let ts = Timestamp::now();
        let submission =
            Submission::reconstitute(id, "session-xyz".to_string(), ts, Some("note".into()));

        assert_eq!(submission.id(), &id);
        assert_eq!(submission.session_id(), "session-xyz");
        assert_eq!(submission.created_at(), &ts);
        assert_eq!(submission.clinician_notes(), Some("note"));
    }
}
