//! GetScreenerHandler - read handler for the static screener document.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::ScreenerContent;

/// Handler returning the screener display document.
pub struct GetScreenerHandler {
    content: Arc<dyn ScreenerContent>,
}

impl GetScreenerHandler {
    pub fn new(content: Arc<dyn ScreenerContent>) -> Self {
        Self { content }
    }

    pub async fn handle(&self) -> Result<serde_json::Value, DomainError> {
        self.content.get_screener().await
    }
}
