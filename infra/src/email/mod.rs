//! Email Service Module
//!
//! This module provides the mail channel verification codes travel through.
//!
//! ## Features
//!
//! - **Email Service Trait**: Common interface for mail providers
//! - **Mock Implementation**: Console output for development
//! - **Delivery Adapter**: Bridges any provider to the core delivery trait
//! - **Security**: Addresses masked in logs

pub mod delivery_adapter;
pub mod email_service;
pub mod mock_email;

// Re-export commonly used types
pub use delivery_adapter::EmailDeliveryAdapter;
pub use email_service::EmailService;
pub use mock_email::MockEmailService;

use crate::config::EmailConfig;
use crate::InfrastructureError;

/// Create an email service based on configuration
///
/// Only the `mock` provider exists; any other name is a configuration error.
pub fn create_email_service(config: &EmailConfig) -> Result<MockEmailService, InfrastructureError> {
    match config.provider.to_lowercase().as_str() {
        "mock" => {
            tracing::info!(from = %config.from_address, "Using mock email service");
            Ok(MockEmailService::with_options(config.console_output, false))
        }
        other => Err(InfrastructureError::Config(format!(
            "Unsupported email provider: {}",
            other
        ))),
    }
}
