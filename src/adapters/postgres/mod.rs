//! PostgreSQL adapters - sqlx implementations of the persistence ports.

mod answer_reader;
mod question_catalog;
mod submission_store;

pub use answer_reader::PostgresAnswerReader;
pub use question_catalog::PostgresQuestionCatalog;
pub use submission_store::PostgresSubmissionStore;
