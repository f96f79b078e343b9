//! Email Delivery Trait Adapter
//!
//! Implements the core `CodeDeliveryTrait` on top of any `EmailService`,
//! bridging the infrastructure implementation with the core domain trait.

use async_trait::async_trait;
use std::sync::Arc;

use amb_core::services::verification::CodeDeliveryTrait;

use super::email_service::EmailService;

/// Adapter that delivers verification codes by email
pub struct EmailDeliveryAdapter<E: EmailService> {
    inner: Arc<E>,
}

impl<E: EmailService> EmailDeliveryAdapter<E> {
    pub fn new(inner: Arc<E>) -> Self {
        Self { inner }
    }

    /// The wrapped mail service
    pub fn inner(&self) -> &Arc<E> {
        &self.inner
    }
}

#[async_trait]
impl<E: EmailService> CodeDeliveryTrait for EmailDeliveryAdapter<E> {
    async fn deliver_code(&self, email: &str, code: &str) -> Result<String, String> {
        self.inner
            .send_verification_code(email, code)
            .await
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::MockEmailService;

    #[tokio::test]
    async fn test_adapter_delivers_through_mail_service() {
        let mail = Arc::new(MockEmailService::with_options(false, false));
        let adapter = EmailDeliveryAdapter::new(mail.clone());

        let message_id = adapter.deliver_code("a@b.com", "4242").await.unwrap();
        assert!(message_id.starts_with("mock_"));
        assert_eq!(mail.last_code_for("a@b.com").as_deref(), Some("4242"));
    }

    #[tokio::test]
    async fn test_adapter_maps_errors_to_strings() {
        let mail = Arc::new(MockEmailService::with_options(false, true));
        let adapter = EmailDeliveryAdapter::new(mail);

        let err = adapter.deliver_code("a@b.com", "4242").await.unwrap_err();
        assert!(err.contains("Simulated email sending failure"));
    }
}
