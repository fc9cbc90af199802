//! PostgreSQL implementation of QuestionCatalog.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId};
use crate::domain::screening::Question;
use crate::ports::QuestionCatalog;

/// PostgreSQL implementation of QuestionCatalog.
#[derive(Clone)]
pub struct PostgresQuestionCatalog {
    pool: PgPool,
}

impl PostgresQuestionCatalog {
    /// Creates a new PostgresQuestionCatalog.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionCatalog for PostgresQuestionCatalog {
    async fn get_all_questions(&self) -> Result<Vec<Question>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT q.question_id, q.title, d.name AS domain
            FROM questions q
            JOIN domains d ON q.domain_id = d.id
            ORDER BY q.question_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch questions: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_question).collect()
    }
}

fn row_to_question(row: sqlx::postgres::PgRow) -> Result<Question, DomainError> {
    let key: String = row.try_get("question_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get question_id: {}", e),
        )
    })?;

    let title: String = row.try_get("title").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get title: {}", e),
        )
    })?;

    let domain_name: String = row.try_get("domain").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get domain: {}", e),
        )
    })?;

    let domain = domain_name.parse().map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid domain: {}", e))
    })?;

    let question_id = QuestionId::new(key).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid question_id: {}", e),
        )
    })?;

    Question::new(question_id, title, domain).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid catalog row: {}", e),
        )
    })
}
