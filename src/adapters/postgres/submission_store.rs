//! PostgreSQL implementation of the submission store.
//!
//! The transaction handle wraps a checked-out `sqlx::Transaction`; commit and
//! rollback consume it, and dropping it unfinished rolls back at the driver
//! level, so the connection is released exactly once on every exit path.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::postgres::Postgres;
use sqlx::{PgPool, Row, Transaction};
use uuid::Uuid;

use crate::domain::foundation::{
    ClinicalDomain, DomainError, ErrorCode, QuestionId, SubmissionId,
};
use crate::domain::screening::{NewAnswer, Submission};
use crate::ports::{SubmissionStore, SubmissionTransaction};

/// Postgres unique-violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL implementation of SubmissionStore.
#[derive(Clone)]
pub struct PostgresSubmissionStore {
    pool: PgPool,
}

impl PostgresSubmissionStore {
    /// Creates a new PostgresSubmissionStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PostgresSubmissionStore {
    async fn begin(&self) -> Result<Box<dyn SubmissionTransaction>, DomainError> {
        let tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to begin transaction: {}", e),
            )
        })?;

        Ok(Box::new(PgSubmissionTransaction { tx }))
    }
}

struct PgSubmissionTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl SubmissionTransaction for PgSubmissionTransaction {
    async fn find_submission_id_by_session(
        &mut self,
        session_id: &str,
    ) -> Result<Option<SubmissionId>, DomainError> {
        let row: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM submissions WHERE session_id = $1")
                .bind(session_id)
                .fetch_optional(&mut *self.tx)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to check for existing submission: {}", e),
                    )
                })?;

        Ok(row.map(|(id,)| SubmissionId::from_uuid(id)))
    }

    async fn insert_submission(&mut self, submission: &Submission) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO submissions (id, session_id, clinician_notes, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(submission.id().as_uuid())
        .bind(submission.session_id())
        .bind(submission.clinician_notes())
        .bind(submission.created_at().as_datetime())
        .execute(&mut *self.tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::new(
                    ErrorCode::SessionAlreadySubmitted,
                    format!("Submission already exists for session: {}", e),
                )
            } else {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to insert submission: {}", e),
                )
            }
        })?;

        Ok(())
    }

    async fn insert_answer(
        &mut self,
        submission_id: &SubmissionId,
        answer: &NewAnswer,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO answers (submission_id, question_id, value)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(submission_id.as_uuid())
        .bind(answer.question_id().as_str())
        .bind(answer.value().as_i32())
        .execute(&mut *self.tx)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert answer: {}", e),
            )
        })?;

        Ok(())
    }

    async fn resolve_domains(
        &mut self,
        question_ids: &[QuestionId],
    ) -> Result<HashMap<QuestionId, ClinicalDomain>, DomainError> {
        let keys: Vec<String> = question_ids
            .iter()
            .map(|id| id.as_str().to_string())
            .collect();

        let rows = sqlx::query(
            r#"
            SELECT q.question_id, d.name AS domain
            FROM questions q
            JOIN domains d ON q.domain_id = d.id
            WHERE q.question_id = ANY($1)
            "#,
        )
        .bind(&keys)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to resolve question domains: {}", e),
            )
        })?;

        let mut domains = HashMap::with_capacity(rows.len());
        for row in rows {
            let key: String = row.try_get("question_id").map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to get question_id: {}", e),
                )
            })?;
            let name: String = row.try_get("domain").map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to get domain: {}", e),
                )
            })?;

            let question_id = QuestionId::new(key).map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid question_id: {}", e),
                )
            })?;
            let domain = name.parse().map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid domain: {}", e))
            })?;

            domains.insert(question_id, domain);
        }

        Ok(domains)
    }

    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        self.tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit transaction: {}", e),
            )
        })
    }

    async fn rollback(self: Box<Self>) -> Result<(), DomainError> {
        self.tx.rollback().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to roll back transaction: {}", e),
            )
        })
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == UNIQUE_VIOLATION)
        .unwrap_or(false)
}
