//! Ports - collaborator interfaces the core depends on.
//!
//! Concrete implementations live in `adapters` and are injected at process
//! start; no global singletons.

mod answer_reader;
mod question_catalog;
mod screener_content;
mod submission_store;

pub use answer_reader::{AnswerReader, AnswerRecord};
pub use question_catalog::QuestionCatalog;
pub use screener_content::ScreenerContent;
pub use submission_store::{SubmissionStore, SubmissionTransaction};
