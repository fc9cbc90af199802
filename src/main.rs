//! Clinical screener backend server binary.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use clinical_screener::adapters::http::{
    api_routes, AnswerHandlers, QuestionHandlers, ScreenerHandlers,
};
use clinical_screener::adapters::postgres::{
    PostgresAnswerReader, PostgresQuestionCatalog, PostgresSubmissionStore,
};
use clinical_screener::adapters::screener::FilesystemScreenerContent;
use clinical_screener::application::handlers::screening::{
    GetScreenerHandler, ListAnswersHandler, ListQuestionsHandler, ProcessSubmissionHandler,
};
use clinical_screener::config::AppConfig;

const CORRELATION_ID_HEADER: &str = "x-correlation-id";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server.log_level);

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // Wire adapters into handlers at process start; no global singletons.
    let catalog = Arc::new(PostgresQuestionCatalog::new(pool.clone()));
    let store = Arc::new(PostgresSubmissionStore::new(pool.clone()));
    let answer_reader = Arc::new(PostgresAnswerReader::new(pool.clone()));
    let screener_content = Arc::new(FilesystemScreenerContent::new(
        config.content.screener_path.clone(),
    ));

    let question_handlers =
        QuestionHandlers::new(Arc::new(ListQuestionsHandler::new(catalog.clone())));
    let answer_handlers = AnswerHandlers::new(
        Arc::new(ProcessSubmissionHandler::new(catalog, store)),
        Arc::new(ListAnswersHandler::new(answer_reader)),
    );
    let screener_handlers =
        ScreenerHandlers::new(Arc::new(GetScreenerHandler::new(screener_content)));

    let correlation_header = HeaderName::from_static(CORRELATION_ID_HEADER);
    let app = Router::new()
        .route("/health", get(health))
        .nest(
            "/api",
            api_routes(question_handlers, answer_handlers, screener_handlers),
        )
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(
            correlation_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(correlation_header))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config)?);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "Clinical screener backend listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /health - liveness probe
async fn health() -> &'static str {
    "OK"
}

fn init_tracing(directives: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn cors_layer(config: &AppConfig) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    let origins = config.server.cors_allowlist();
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins: Result<Vec<HeaderValue>, _> =
        origins.iter().map(|o| o.parse::<HeaderValue>()).collect();
    Ok(CorsLayer::new()
        .allow_origin(origins?)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(CORRELATION_ID_HEADER),
        ]))
}
