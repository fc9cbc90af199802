//! Answer submission HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{AnswerInput, AnswerRecordResponse, SubmissionResponse, SubmitAnswersRequest};
pub use handlers::AnswerHandlers;
pub use routes::answer_routes;
