//! PostgreSQL implementation of AnswerReader.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId, SubmissionId, Timestamp};
use crate::ports::{AnswerReader, AnswerRecord};

/// PostgreSQL implementation of AnswerReader.
#[derive(Clone)]
pub struct PostgresAnswerReader {
    pool: PgPool,
}

impl PostgresAnswerReader {
    /// Creates a new PostgresAnswerReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerReader for PostgresAnswerReader {
    async fn list_all(&self) -> Result<Vec<AnswerRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, submission_id, question_id, value, created_at
            FROM answers
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch answers: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_record).collect()
    }
}

fn row_to_record(row: sqlx::postgres::PgRow) -> Result<AnswerRecord, DomainError> {
    let id: i64 = row.try_get("id").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to get id: {}", e))
    })?;

    let submission_id: Uuid = row.try_get("submission_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get submission_id: {}", e),
        )
    })?;

    let question_key: String = row.try_get("question_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get question_id: {}", e),
        )
    })?;

    let value: i32 = row.try_get("value").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get value: {}", e),
        )
    })?;

    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get created_at: {}", e),
        )
    })?;

    let question_id = QuestionId::new(question_key).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid question_id: {}", e),
        )
    })?;

    Ok(AnswerRecord {
        id,
        submission_id: SubmissionId::from_uuid(submission_id),
        question_id,
        value,
        created_at: Timestamp::from_datetime(created_at),
    })
}
