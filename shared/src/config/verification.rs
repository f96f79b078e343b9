//! Email verification and signup flow configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Default delay before a requested code is issued, in milliseconds
pub const DEFAULT_CODE_DELAY_MS: u64 = 2000;

/// Default location the client is sent to after a completed signup
pub const DEFAULT_LOGIN_LOCATION: &str = "/login";

/// Default idle lifetime of a form session, in seconds
pub const DEFAULT_SESSION_TTL_SECONDS: u64 = 1800;

/// Verification flow configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Delay between a code request and the code being issued
    #[serde(default = "default_code_delay_ms")]
    pub code_delay_ms: u64,

    /// Whether signup is refused until the email has been confirmed
    #[serde(default)]
    pub require_confirmation: bool,

    /// Where a successful signup redirects to
    #[serde(default = "default_login_location")]
    pub login_location: String,

    /// Idle time after which a form session is purged
    #[serde(default = "default_session_ttl_seconds")]
    pub session_ttl_seconds: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_delay_ms: default_code_delay_ms(),
            require_confirmation: false,
            login_location: default_login_location(),
            session_ttl_seconds: default_session_ttl_seconds(),
        }
    }
}

impl VerificationConfig {
    /// Override fields from the `SIGNUP_*` environment variables
    pub fn merge_env(mut self) -> Self {
        if let Some(delay) = parse_var("SIGNUP_CODE_DELAY_MS") {
            self.code_delay_ms = delay;
        }
        if let Some(require) = parse_var("SIGNUP_REQUIRE_CONFIRMATION") {
            self.require_confirmation = require;
        }
        if let Ok(location) = env::var("SIGNUP_LOGIN_LOCATION") {
            if !location.trim().is_empty() {
                self.login_location = location;
            }
        }
        // A zero TTL would expire every session on creation
        if let Some(ttl) = parse_var::<u64>("SIGNUP_SESSION_TTL_SECONDS").filter(|ttl| *ttl > 0) {
            self.session_ttl_seconds = ttl;
        }
        self
    }

    /// Build from defaults plus environment overrides
    pub fn from_env() -> Self {
        Self::default().merge_env()
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn default_code_delay_ms() -> u64 {
    DEFAULT_CODE_DELAY_MS
}

fn default_login_location() -> String {
    String::from(DEFAULT_LOGIN_LOCATION)
}

fn default_session_ttl_seconds() -> u64 {
    DEFAULT_SESSION_TTL_SECONDS
}
