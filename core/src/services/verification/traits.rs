//! Traits for the code delivery channel

use async_trait::async_trait;

/// Out-of-band channel through which an issued code reaches the user
#[async_trait]
pub trait CodeDeliveryTrait: Send + Sync {
    /// Deliver `code` to `email`, returning a message identifier
    async fn deliver_code(&self, email: &str, code: &str) -> Result<String, String>;
}
