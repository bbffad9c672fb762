//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `COLLAB_HUB` prefix and
//! `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use collab_hub::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod recommendation;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use recommendation::RecommendationConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL settings; the in-memory store is used when absent
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Recommendation limits
    #[serde(default)]
    pub recommendation: RecommendationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `COLLAB_HUB__*` variables:
    ///
    /// - `COLLAB_HUB__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `COLLAB_HUB__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COLLAB_HUB")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate every configured section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.recommendation.validate()?;
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

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "COLLAB_HUB__SERVER__PORT",
        "COLLAB_HUB__SERVER__ENVIRONMENT",
        "COLLAB_HUB__DATABASE__URL",
        "COLLAB_HUB__DATABASE__RUN_MIGRATIONS",
        "COLLAB_HUB__RECOMMENDATION__DEFAULT_LIMIT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn loads_defaults_without_database() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert!(config.database.is_none());
        assert_eq!(config.recommendation.default_limit, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_database_section_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("COLLAB_HUB__DATABASE__URL", "postgres://localhost/collab");
        env::set_var("COLLAB_HUB__DATABASE__RUN_MIGRATIONS", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        let database = config.database.unwrap();
        assert_eq!(database.url, "postgres://localhost/collab");
        assert!(database.run_migrations);
    }

    #[test]
    fn custom_port_and_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("COLLAB_HUB__SERVER__PORT", "3000");
        env::set_var("COLLAB_HUB__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
    }

    #[test]
    fn invalid_recommendation_limit_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("COLLAB_HUB__RECOMMENDATION__DEFAULT_LIMIT", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidRecommendationLimit)
        );
    }
}
