//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod mail;
pub mod ordering;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::{DatabaseConfig, DatabaseProvider};
pub use self::logging::LoggingConfig;
pub use self::mail::MailConfig;
pub use self::ordering::OrderingConfig;

use crate::error::AppError;

/// Legacy environment variable holding the token signing secret.
pub const LEGACY_JWT_ENV: &str = "JWT_KEY";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Order placement policy.
    #[serde(default)]
    pub ordering: OrderingConfig,
    /// Mail relay settings.
    #[serde(default)]
    pub mail: MailConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `DOCESABOR__`. `JWT_KEY`, when
    /// set, replaces the signing secret.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("DOCESABOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let mut cfg: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        cfg.apply_legacy_secret(std::env::var(LEGACY_JWT_ENV).ok());
        cfg.validate()?;
        Ok(cfg)
    }

    /// Override the signing secret with a non-empty legacy value.
    pub fn apply_legacy_secret(&mut self, secret: Option<String>) {
        if let Some(secret) = secret.filter(|s| !s.trim().is_empty()) {
            self.auth.jwt_secret = secret;
        }
    }

    /// Reject settings the server cannot start with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        if self.auth.token_ttl_minutes == 0 {
            return Err(AppError::configuration(
                "auth.token_ttl_minutes must be greater than zero",
            ));
        }
        if self.mail.enabled && self.mail.api_token.trim().is_empty() {
            return Err(AppError::configuration(
                "mail.api_token is required when mail.enabled is true",
            ));
        }
        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            return Err(AppError::configuration(format!(
                "logging.format must be \"json\" or \"pretty\", got \"{}\"",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// Whether the signing secret is still the shipped placeholder.
    pub fn uses_placeholder_secret(&self) -> bool {
        self.auth.jwt_secret == auth::PLACEHOLDER_JWT_SECRET
    }
}
