//! ListAnswersHandler - read handler over persisted answers.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::{AnswerReader, AnswerRecord};

/// Handler returning all persisted answers, newest first.
pub struct ListAnswersHandler {
    reader: Arc<dyn AnswerReader>,
}

impl ListAnswersHandler {
    pub fn new(reader: Arc<dyn AnswerReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Vec<AnswerRecord>, DomainError> {
        self.reader.list_all().await
    }
}
