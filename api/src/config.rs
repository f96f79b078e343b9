//! API server configuration
//!
//! Combines the shared application settings with the mail provider settings
//! owned by the infrastructure layer.

use amb_infra::config::EmailConfig;
use amb_infra::InfrastructureError;
use amb_shared::AppConfig;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub email: EmailConfig,
}

impl Config {
    /// Load from `.env` and the process environment
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let infra = amb_infra::load_config()?;
        Ok(Self {
            app: AppConfig::from_env(),
            email: infra.email,
        })
    }

    pub fn bind_address(&self) -> String {
        self.app.server.bind_address()
    }

    pub fn is_production(&self) -> bool {
        self.app.environment.is_production()
    }

    /// How often expired form sessions are purged
    pub fn purge_interval(&self) -> Duration {
        let ttl = self.app.verification.session_ttl_seconds.max(1);
        Duration::from_secs((ttl / 4).clamp(1, 300))
    }
}
