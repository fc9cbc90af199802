//! ProcessSubmissionHandler - the screener submission coordinator.
//!
//! Validates a candidate submission against the question catalog, then runs
//! the atomic persist-and-score transaction: duplicate-session check,
//! submission and answer inserts, domain resolution, scoring, commit. Any
//! failure inside the transaction rolls everything back; a submission is
//! never stored without a computed result set.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::foundation::{QuestionId, SubmissionId};
use crate::domain::scoring::{aggregate_domain_scores, determine_assessments};
use crate::domain::screening::{AnswerValue, NewAnswer, ScreeningError, Submission};
use crate::ports::{QuestionCatalog, SubmissionStore, SubmissionTransaction};

/// One raw answer as received from the transport layer.
#[derive(Debug, Clone)]
pub struct RawAnswer {
    pub question_id: String,
    pub value: i64,
}

/// Command to process a completed screener submission.
#[derive(Debug, Clone)]
pub struct ProcessSubmissionCommand {
    pub session_id: String,
    pub answers: Vec<RawAnswer>,
    pub clinician_notes: Option<String>,
}

/// Result of a successfully processed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub submission_id: SubmissionId,
    pub results: Vec<String>,
}

/// Coordinator for the submission-and-scoring pipeline.
///
/// Holds no mutable state of its own; per-session serialization comes from
/// the store's uniqueness constraint plus the in-transaction existence check.
pub struct ProcessSubmissionHandler {
    catalog: Arc<dyn QuestionCatalog>,
    store: Arc<dyn SubmissionStore>,
}

impl ProcessSubmissionHandler {
    pub fn new(catalog: Arc<dyn QuestionCatalog>, store: Arc<dyn SubmissionStore>) -> Self {
        Self { catalog, store }
    }

    /// Processes a completed submission.
    ///
    /// Validation is fail-fast and runs before the transaction opens; the
    /// duplicate-session check runs inside the transaction to close the race
    /// between concurrent submissions for the same session.
    pub async fn handle(
        &self,
        cmd: ProcessSubmissionCommand,
    ) -> Result<SubmissionOutcome, ScreeningError> {
        // 1. Session id present
        if cmd.session_id.is_empty() {
            return Err(ScreeningError::MissingSessionId);
        }

        // 2. Answers present
        if cmd.answers.is_empty() {
            return Err(ScreeningError::EmptyAnswers);
        }

        // 3. Each answer well-formed; first violation rejects the batch
        let mut answers = Vec::with_capacity(cmd.answers.len());
        for raw in &cmd.answers {
            let question_id = QuestionId::new(raw.question_id.clone())
                .map_err(|_| ScreeningError::InvalidAnswer)?;
            let value =
                AnswerValue::new(raw.value).map_err(|_| ScreeningError::InvalidAnswer)?;
            answers.push(NewAnswer::new(question_id, value));
        }

        // 4. Full catalog coverage, missing ids reported in catalog order
        let catalog = self.catalog.get_all_questions().await?;
        let answered: HashSet<&QuestionId> = answers.iter().map(|a| a.question_id()).collect();
        let missing: Vec<QuestionId> = catalog
            .iter()
            .filter(|q| !answered.contains(q.question_id()))
            .map(|q| q.question_id().clone())
            .collect();
        if !missing.is_empty() {
            return Err(ScreeningError::IncompleteAnswers { missing });
        }

        // 5-8. Atomic persist and score
        let mut tx = self.store.begin().await?;
        let result =
            persist_and_score(&mut *tx, &cmd.session_id, &answers, cmd.clinician_notes).await;
        match result {
            Ok(outcome) => {
                tx.commit().await?;
                Ok(outcome)
            }
            Err(err) => {
                // The originating error propagates unchanged; a rollback
                // failure must not mask it.
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "Rollback failed after submission error");
                }
                Err(err)
            }
        }
    }
}

/// Transaction body: duplicate check, inserts, scoring.
///
/// The caller owns commit/rollback; everything here only reports errors.
async fn persist_and_score(
    tx: &mut dyn SubmissionTransaction,
    session_id: &str,
    answers: &[NewAnswer],
    clinician_notes: Option<String>,
) -> Result<SubmissionOutcome, ScreeningError> {
    if tx
        .find_submission_id_by_session(session_id)
        .await?
        .is_some()
    {
        return Err(ScreeningError::SessionAlreadySubmitted);
    }

    let submission = Submission::new(session_id, clinician_notes)
        .map_err(|_| ScreeningError::MissingSessionId)?;
    tx.insert_submission(&submission).await?;

    for answer in answers {
        tx.insert_answer(submission.id(), answer).await?;
    }

    let question_ids: Vec<QuestionId> =
        answers.iter().map(|a| a.question_id().clone()).collect();
    let domains = match tx.resolve_domains(&question_ids).await {
        Ok(domains) => domains,
        Err(err) => {
            tracing::error!(error = %err, "Domain resolution failed while scoring submission");
            return Err(ScreeningError::ScoringFailed);
        }
    };

    let scores = aggregate_domain_scores(answers, &domains);
    let results = determine_assessments(&scores);

    Ok(SubmissionOutcome {
        submission_id: *submission.id(),
        results,
    })
}
