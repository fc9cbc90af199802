//! Screening command and query handlers.

mod get_screener;
mod list_answers;
mod list_questions;
mod process_submission;

pub use get_screener::GetScreenerHandler;
pub use list_answers::ListAnswersHandler;
pub use list_questions::ListQuestionsHandler;
pub use process_submission::{
    ProcessSubmissionCommand, ProcessSubmissionHandler, RawAnswer, SubmissionOutcome,
};
