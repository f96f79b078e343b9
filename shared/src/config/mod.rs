//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server bind settings
//! - `verification` - Email verification and signup flow settings

pub mod environment;
pub mod server;
pub mod verification;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use verification::VerificationConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Verification flow configuration
    pub verification: VerificationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            verification: VerificationConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::default(),
            verification: VerificationConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            verification: VerificationConfig {
                require_confirmation: true,
                ..Default::default()
            },
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment
    ///
    /// The environment picks the preset; individual variables then override it.
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        let mut config = match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        };

        config.server = config.server.merge_env();
        config.verification = config.verification.merge_env();
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(format) = std::env::var("LOG_FORMAT").ok().and_then(|v| v.parse().ok()) {
            config.logging.format = format;
        }
        if let Some(timestamp) = std::env::var("LOG_TIMESTAMP").ok().and_then(|v| v.trim().parse().ok()) {
            config.logging.timestamp = timestamp;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_development() {
        let config = AppConfig::default();
        assert!(config.environment.is_development());
        assert!(!config.verification.require_confirmation);
    }

    #[test]
    fn test_production_requires_confirmation() {
        let config = AppConfig::production();
        assert!(config.environment.is_production());
        assert!(config.verification.require_confirmation);
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_from_env_overrides_preset() {
        temp_env::with_vars(
            [
                ("ENVIRONMENT", Some("production")),
                ("SIGNUP_REQUIRE_CONFIRMATION", Some("false")),
                ("SERVER_PORT", Some("9090")),
                ("LOG_LEVEL", Some("trace")),
                ("LOG_FORMAT", Some("compact")),
                ("LOG_TIMESTAMP", Some("false")),
            ],
            || {
                let config = AppConfig::from_env();
                assert!(config.environment.is_production());
                assert!(!config.verification.require_confirmation);
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.logging.level, "trace");
                assert_eq!(config.logging.format, LogFormat::Compact);
                assert!(!config.logging.timestamp);
            },
        );
    }

    #[test]
    fn test_unknown_log_format_keeps_preset() {
        temp_env::with_vars(
            [
                ("ENVIRONMENT", Some("production")),
                ("LOG_FORMAT", Some("xml")),
                ("LOG_TIMESTAMP", None),
            ],
            || {
                let config = AppConfig::from_env();
                assert_eq!(config.logging.format, LogFormat::Json);
                assert!(config.logging.timestamp);
            },
        );
    }
}
