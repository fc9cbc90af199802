//! Application configuration module
//!
//! Typed configuration loaded from environment variables via the `config` and
//! `dotenvy` crates. Variables carry the `CLINICAL_SCREENER` prefix with `__`
//! separating nested sections, so `CLINICAL_SCREENER__DATABASE__URL` lands in
//! `database.url`. Each section validates itself semantically after loading.
//!
//! # Example
//!
//! ```no_run
//! use clinical_screener::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod content;
mod database;
mod error;
mod server;

pub use content::ContentConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Static content paths (screener document, seed catalog)
    #[serde(default)]
    pub content: ContentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file is read first when present (development convenience);
    /// real environment variables win over it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable cannot be parsed into the
    /// expected type. Missing required values surface later, from
    /// [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CLINICAL_SCREENER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.content.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const URL_VAR: &str = "CLINICAL_SCREENER__DATABASE__URL";
    const PORT_VAR: &str = "CLINICAL_SCREENER__SERVER__PORT";
    const ENV_VAR: &str = "CLINICAL_SCREENER__SERVER__ENVIRONMENT";

    fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let _guard = ENV_MUTEX.lock().unwrap();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = f();
        for var in [URL_VAR, PORT_VAR, ENV_VAR] {
            env::remove_var(var);
        }
        result
    }

    #[test]
    fn test_loads_and_validates_with_only_a_database_url() {
        let config = with_env(
            &[(URL_VAR, "postgresql://test@localhost/clinical_screener")],
            || AppConfig::load().unwrap(),
        );

        assert_eq!(config.database.url, "postgresql://test@localhost/clinical_screener");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unset_sections_fall_back_to_defaults() {
        let config = with_env(
            &[(URL_VAR, "postgresql://test@localhost/clinical_screener")],
            || AppConfig::load().unwrap(),
        );

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3001);
        assert!(!config.is_production());
        assert_eq!(
            config.content.screener_path.to_str(),
            Some("data/screener.json")
        );
    }

    #[test]
    fn test_env_overrides_reach_nested_sections() {
        let config = with_env(
            &[
                (URL_VAR, "postgresql://test@localhost/clinical_screener"),
                (PORT_VAR, "8080"),
                (ENV_VAR, "production"),
            ],
            || AppConfig::load().unwrap(),
        );

        assert_eq!(config.server.port, 8080);
        assert!(config.is_production());
    }

    #[test]
    fn test_missing_database_url_fails_validation_not_loading() {
        let config = with_env(&[], || AppConfig::load().unwrap());
        assert!(config.validate().is_err());
    }
}
