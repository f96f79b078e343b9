//! Email Service Interface
//!
//! Defines the trait for mail providers that deliver verification codes.

use async_trait::async_trait;

use crate::InfrastructureError;

/// Subject line of the verification mail
pub const VERIFICATION_SUBJECT: &str = "Ambition email verification | 야심작 이메일 인증번호";

/// Body of the verification mail carrying `code`
pub fn verification_body(code: &str) -> String {
    format!("Your verification code is {code} | 인증번호는 {code}입니다.")
}

/// Email service trait for sending messages
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send an email
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Unique identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError>;

    /// Send a verification code using the standard signup template
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<String, InfrastructureError> {
        self.send_email(to, VERIFICATION_SUBJECT, &verification_body(code))
            .await
    }

    /// Get the service provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    async fn is_available(&self) -> bool {
        true
    }
}
