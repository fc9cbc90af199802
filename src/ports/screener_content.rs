//! Screener content port.
//!
//! Serves the static display document (sections, answer labels, question
//! text) the frontend renders. Content is deployment-static; the port only
//! loads and returns it.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Read port for the static screener display document.
#[async_trait]
pub trait ScreenerContent: Send + Sync {
    /// Returns the screener document as raw JSON.
    ///
    /// # Errors
    ///
    /// - `ScreenerUnavailable` if the document cannot be loaded or parsed
    async fn get_screener(&self) -> Result<serde_json::Value, DomainError>;
}
