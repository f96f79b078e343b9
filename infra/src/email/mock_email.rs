//! Mock Email Service Implementation
//!
//! A mock implementation of the email service for development and testing.
//! This implementation logs messages to the console instead of sending them,
//! which is how the signup page's code "arrives" during development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use uuid::Uuid;

use amb_shared::email::mask_email;

use super::email_service::{verification_body, EmailService, VERIFICATION_SUBJECT};
use crate::InfrastructureError;

/// Mock email service for development and testing
///
/// This implementation:
/// - Logs messages to console
/// - Generates mock message IDs
/// - Tracks message count and the last code per recipient for testing
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Last verification code sent to each recipient
    last_codes: Arc<Mutex<HashMap<String, String>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            last_codes: Arc::new(Mutex::new(HashMap::new())),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// The last verification code delivered to `to`
    pub fn last_code_for(&self, to: &str) -> Option<String> {
        self.last_codes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(to)
            .cloned()
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        if to.trim().is_empty() {
            return Err(InfrastructureError::Email("Recipient address is empty".to_string()));
        }

        // Simulate failure if configured
        if self.simulate_failure {
            warn!(
                "Mock email service simulating failure for recipient: {}",
                mask_email(to)
            );
            return Err(InfrastructureError::Email(
                "Simulated email sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        let masked = mask_email(to);

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK EMAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {} (masked: {})", to, masked);
            println!("Subject: {}", subject);
            println!("Message ID: {}", message_id);
            println!("Content: {}", body);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "email_service",
            provider = "mock",
            to = %masked,
            message_id = %message_id,
            message_length = body.len(),
            "Email sent successfully (mock)"
        );

        Ok(message_id)
    }

    async fn send_verification_code(&self, to: &str, code: &str) -> Result<String, InfrastructureError> {
        let message_id = self
            .send_email(to, VERIFICATION_SUBJECT, &verification_body(code))
            .await?;

        self.last_codes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(to.to_string(), code.to_string());
        debug!(target: "email_service", to = %mask_email(to), code, "Verification code mailed (mock)");

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_email_send_success() {
        let service = MockEmailService::with_options(false, false);
        let message_id = service
            .send_email("a@b.com", "Subject", "Body")
            .await
            .unwrap();

        assert!(message_id.starts_with("mock_"));
        assert_eq!(service.get_message_count(), 1);
        assert_eq!(service.provider_name(), "Mock");
    }

    #[tokio::test]
    async fn test_mock_email_empty_recipient() {
        let service = MockEmailService::with_options(false, false);
        match service.send_email("  ", "Subject", "Body").await {
            Err(InfrastructureError::Email(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected Email error"),
        }
        assert_eq!(service.get_message_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_email_simulate_failure() {
        let mut service = MockEmailService::with_options(false, false);
        service.set_simulate_failure(true);

        assert!(service.send_verification_code("a@b.com", "1").await.is_err());
        assert!(!service.is_available().await);
        assert!(service.last_code_for("a@b.com").is_none());
    }

    #[tokio::test]
    async fn test_mock_email_records_last_code() {
        let service = MockEmailService::with_options(false, false);
        service.send_verification_code("a@b.com", "111").await.unwrap();
        service.send_verification_code("a@b.com", "222").await.unwrap();

        assert_eq!(service.last_code_for("a@b.com").as_deref(), Some("222"));
        assert_eq!(service.get_message_count(), 2);
    }

    #[test]
    fn test_verification_body_contains_code() {
        let body = verification_body("8675");
        assert!(body.contains("8675"));
        assert!(VERIFICATION_SUBJECT.contains("verification"));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let service = MockEmailService::with_options(false, false);
        let clone = service.clone();
        clone.send_verification_code("a@b.com", "9").await.unwrap();

        assert_eq!(service.get_message_count(), 1);
        assert_eq!(service.last_code_for("a@b.com").as_deref(), Some("9"));
    }
}
