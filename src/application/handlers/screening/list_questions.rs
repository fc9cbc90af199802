//! ListQuestionsHandler - read handler for the question catalog.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::screening::Question;
use crate::ports::QuestionCatalog;

/// Handler returning the full question catalog.
pub struct ListQuestionsHandler {
    catalog: Arc<dyn QuestionCatalog>,
}

impl ListQuestionsHandler {
    pub fn new(catalog: Arc<dyn QuestionCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<Vec<Question>, DomainError> {
        self.catalog.get_all_questions().await
    }
}
