//! Screening domain - questions, submissions, and answers.

mod errors;
mod question;
mod submission;

pub use errors::ScreeningError;
pub use question::Question;
pub use submission::{
    AnswerValue, NewAnswer, Submission, ANSWER_VALUE_MAX, ANSWER_VALUE_MIN,
};
