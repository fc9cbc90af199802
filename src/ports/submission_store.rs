//! Submission store port (write side).
//!
//! Defines the transactional contract the submission coordinator runs
//! against. The store hands out a transaction handle; the handle is
//! exclusively owned by one in-flight submission and released exactly once,
//! through `commit` or `rollback`.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{ClinicalDomain, DomainError, QuestionId, SubmissionId};
use crate::domain::screening::{NewAnswer, Submission};

/// Entry point for submission persistence.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Opens a transaction and checks out its handle.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` if a connection cannot be acquired.
    async fn begin(&self) -> Result<Box<dyn SubmissionTransaction>, DomainError>;
}

/// Checked-out transactional handle.
///
/// Every operation is one parameterized statement; no business rules live
/// here. `commit` and `rollback` consume the handle so it cannot be reused;
/// dropping it without committing discards the transaction at the storage
/// layer.
#[async_trait]
pub trait SubmissionTransaction: Send {
    /// Looks up an existing submission id for a session.
    async fn find_submission_id_by_session(
        &mut self,
        session_id: &str,
    ) -> Result<Option<SubmissionId>, DomainError>;

    /// Inserts the submission row.
    ///
    /// # Errors
    ///
    /// - `SessionAlreadySubmitted` when the session uniqueness constraint is
    ///   violated (the loser of a same-session race lands here)
    /// - `DatabaseError` on any other persistence failure
    async fn insert_submission(&mut self, submission: &Submission) -> Result<(), DomainError>;

    /// Inserts one answer row belonging to a submission.
    async fn insert_answer(
        &mut self,
        submission_id: &SubmissionId,
        answer: &NewAnswer,
    ) -> Result<(), DomainError>;

    /// Batch-resolves clinical domains for a set of question ids.
    ///
    /// Unknown ids are simply absent from the returned map.
    async fn resolve_domains(
        &mut self,
        question_ids: &[QuestionId],
    ) -> Result<HashMap<QuestionId, ClinicalDomain>, DomainError>;

    /// Commits the transaction, releasing the handle.
    async fn commit(self: Box<Self>) -> Result<(), DomainError>;

    /// Rolls the transaction back, releasing the handle.
    async fn rollback(self: Box<Self>) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SubmissionStore) {}
    }
}
