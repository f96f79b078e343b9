//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Ambition signup
//! service. It provides concrete implementations for the code delivery
//! channel and the storage of form sessions.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Email**: mail service interface, a mock provider, and the adapter
//!   bridging it to the core delivery trait
//! - **Session**: in-memory registry of verification flows keyed by session id

// Re-export core types for convenience
pub use amb_core::errors::*;

/// Email service module - mail providers and the core delivery adapter
pub mod email;

/// Session module - in-memory form session registry
pub mod session;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration management for infrastructure services
    //!
    //! Mail provider selection. Verification and session settings live in
    //! `amb_shared::config::AppConfig`.

    use serde::{Deserialize, Serialize};

    /// Infrastructure configuration settings
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct InfrastructureConfig {
        /// Mail service configuration
        pub email: EmailConfig,
    }

    /// Mail service configuration
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct EmailConfig {
        /// Mail provider ("mock")
        pub provider: String,
        /// Sender address
        pub from_address: String,
        /// Print delivered mail to stdout
        pub console_output: bool,
    }

    impl Default for EmailConfig {
        fn default() -> Self {
            Self {
                provider: "mock".to_string(),
                from_address: "no-reply@ambition.local".to_string(),
                console_output: true,
            }
        }
    }

    impl Default for InfrastructureConfig {
        fn default() -> Self {
            Self {
                email: EmailConfig::default(),
            }
        }
    }
}

/// Load infrastructure configuration from the `MAIL_*` environment variables
///
/// Expects any `.env` file to have been loaded by the caller.
pub fn load_config() -> Result<config::InfrastructureConfig, InfrastructureError> {
    let defaults = config::EmailConfig::default();
    let email = config::EmailConfig {
        provider: std::env::var("MAIL_PROVIDER").unwrap_or(defaults.provider),
        from_address: std::env::var("MAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
        console_output: match std::env::var("MAIL_CONSOLE_OUTPUT") {
            Ok(value) => value.trim().parse().map_err(|_| {
                InfrastructureError::Config(format!("MAIL_CONSOLE_OUTPUT must be a boolean, got {:?}", value))
            })?,
            Err(_) => defaults.console_output,
        },
    };

    Ok(config::InfrastructureConfig { email })
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail service error
    #[error("Email service error: {0}")]
    Email(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAIL_VARS: [&str; 3] = ["MAIL_PROVIDER", "MAIL_FROM_ADDRESS", "MAIL_CONSOLE_OUTPUT"];

    #[test]
    fn test_load_config_defaults() {
        temp_env::with_vars_unset(MAIL_VARS, || {
            let config = load_config().unwrap();
            assert_eq!(config.email.provider, "mock");
            assert_eq!(config.email.from_address, "no-reply@ambition.local");
            assert!(config.email.console_output);
        });
    }

    #[test]
    fn test_load_config_reads_only_mail_settings() {
        temp_env::with_vars(
            [
                ("MAIL_PROVIDER", Some("mock")),
                ("MAIL_FROM_ADDRESS", Some("signup@example.com")),
                ("MAIL_CONSOLE_OUTPUT", Some("false")),
                ("SIGNUP_SESSION_TTL_SECONDS", Some("not-a-number")),
            ],
            || {
                let config = load_config().unwrap();
                assert_eq!(config.email.from_address, "signup@example.com");
                assert!(!config.email.console_output);
            },
        );
    }

    #[test]
    fn test_load_config_rejects_bad_console_flag() {
        temp_env::with_var("MAIL_CONSOLE_OUTPUT", Some("sometimes"), || {
            match load_config() {
                Err(InfrastructureError::Config(msg)) => assert!(msg.contains("MAIL_CONSOLE_OUTPUT")),
                other => panic!("Expected config error, got {:?}", other.map(|c| c.email)),
            }
        });
    }
}
