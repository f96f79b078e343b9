//! Configuration for the verification flow

use std::time::Duration;

use amb_shared::config::verification::{
    VerificationConfig, DEFAULT_CODE_DELAY_MS, DEFAULT_LOGIN_LOCATION,
};

/// Configuration for the verification flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationFlowConfig {
    /// Delay between a code request and the code being issued
    pub code_delay: Duration,
    /// Whether signup requires a confirmed code for the submitted email
    pub require_confirmation: bool,
    /// Location returned to the client after a completed signup
    pub login_location: String,
}

impl Default for VerificationFlowConfig {
    fn default() -> Self {
        Self {
            code_delay: Duration::from_millis(DEFAULT_CODE_DELAY_MS),
            require_confirmation: false,
            login_location: DEFAULT_LOGIN_LOCATION.to_string(),
        }
    }
}

impl From<&VerificationConfig> for VerificationFlowConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            code_delay: Duration::from_millis(config.code_delay_ms),
            require_confirmation: config.require_confirmation,
            login_location: config.login_location.clone(),
        }
    }
}
