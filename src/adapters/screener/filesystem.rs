//! Filesystem implementation of ScreenerContent.
//!
//! Loads the static screener display document from a JSON file shipped with
//! the deployment (`data/screener.json` by default).

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ScreenerContent;

/// Filesystem-backed screener document loader.
#[derive(Clone)]
pub struct FilesystemScreenerContent {
    path: PathBuf,
}

impl FilesystemScreenerContent {
    /// Creates a loader reading from the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ScreenerContent for FilesystemScreenerContent {
    async fn get_screener(&self) -> Result<serde_json::Value, DomainError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::new(
                ErrorCode::ScreenerUnavailable,
                format!("Failed to read screener document: {}", e),
            )
            .with_detail("path", self.path.display().to_string())
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            DomainError::new(
                ErrorCode::ScreenerUnavailable,
                format!("Screener document is not valid JSON: {}", e),
            )
            .with_detail("path", self.path.display().to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn loads_valid_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"id": "bpds", "full_name": "Blueprint Diagnostic Screener"}}"#
        )
        .unwrap();

        let content = FilesystemScreenerContent::new(file.path());
        let doc = content.get_screener().await.unwrap();

        assert_eq!(doc["id"], "bpds");
        assert_eq!(doc["full_name"], "Blueprint Diagnostic Screener");
    }

    #[tokio::test]
    async fn missing_file_is_reported_as_unavailable() {
        let content = FilesystemScreenerContent::new("/nonexistent/screener.json");
        let err = content.get_screener().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ScreenerUnavailable);
    }

    #[tokio::test]
    async fn invalid_json_is_reported_as_unavailable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let content = FilesystemScreenerContent::new(file.path());
        let err = content.get_screener().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ScreenerUnavailable);
    }

    #[tokio::test]
    async fn repeated_reads_return_identical_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"sections": [1, 2, 3]}}"#).unwrap();

        let content = FilesystemScreenerContent::new(file.path());
        let first = content.get_screener().await.unwrap();
        let second = content.get_screener().await.unwrap();
        assert_eq!(first, second);
    }
}
