//! Seeds the screener schema and question catalog.
//!
//! Applies the migrations, then mirrors the static data files into the
//! database. Domains and questions are inserted with ON CONFLICT DO NOTHING,
//! so re-running against an existing database is safe.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use clinical_screener::config::AppConfig;

#[derive(Debug, Deserialize)]
struct QuestionsFile {
    questions: Vec<QuestionEntry>,
}

#[derive(Debug, Deserialize)]
struct QuestionEntry {
    question_id: String,
    title: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::load()?;
    config.validate()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let questions_raw = tokio::fs::read_to_string(&config.content.questions_path).await?;
    let questions: QuestionsFile = serde_json::from_str(&questions_raw)?;

    let domain_map_raw = tokio::fs::read_to_string(&config.content.domain_map_path).await?;
    let domain_map: BTreeMap<String, String> = serde_json::from_str(&domain_map_raw)?;

    let mut domain_ids: HashMap<String, i32> = HashMap::new();
    for domain in domain_map.values() {
        if domain_ids.contains_key(domain) {
            continue;
        }
        let inserted: Option<(i32,)> = sqlx::query_as(
            "INSERT INTO domains (name) VALUES ($1) ON CONFLICT (name) DO NOTHING RETURNING id",
        )
        .bind(domain)
        .fetch_optional(&pool)
        .await?;

        let (id,) = match inserted {
            Some(row) => row,
            None => {
                sqlx::query_as("SELECT id FROM domains WHERE name = $1")
                    .bind(domain)
                    .fetch_one(&pool)
                    .await?
            }
        };
        domain_ids.insert(domain.clone(), id);
    }

    let mut seeded = 0usize;
    for question in &questions.questions {
        let Some(domain) = domain_map.get(&question.question_id) else {
            tracing::warn!(question_id = %question.question_id, "No domain mapping for question, skipping");
            continue;
        };

        sqlx::query(
            "INSERT INTO questions (question_id, title, domain_id) VALUES ($1, $2, $3) \
             ON CONFLICT (question_id) DO NOTHING",
        )
        .bind(&question.question_id)
        .bind(&question.title)
        .bind(domain_ids[domain.as_str()])
        .execute(&pool)
        .await?;
        seeded += 1;
    }

    tracing::info!(
        domains = domain_ids.len(),
        questions = seeded,
        "Database seeded"
    );

    Ok(())
}
