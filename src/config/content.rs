//! Static content configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Paths to the deployment-static content files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Screener display document served by GET /api/screener
    pub screener_path: PathBuf,

    /// Question catalog consumed by the seed binary
    pub questions_path: PathBuf,

    /// Question-to-domain mapping consumed by the seed binary
    pub domain_map_path: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            screener_path: PathBuf::from("data/screener.json"),
            questions_path: PathBuf::from("data/questions.json"),
            domain_map_path: PathBuf::from("data/domain_map.json"),
        }
    }
}

impl ContentConfig {
    /// Validate content configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.screener_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyScreenerPath);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_data_directory() {
        let config = ContentConfig::default();
        assert_eq!(config.screener_path, PathBuf::from("data/screener.json"));
        assert_eq!(config.questions_path, PathBuf::from("data/questions.json"));
        assert_eq!(config.domain_map_path, PathBuf::from("data/domain_map.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_screener_path_fails_validation() {
        let config = ContentConfig {
            screener_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
