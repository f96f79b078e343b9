//! Shared setup for the API integration tests

#![allow(dead_code)]

use actix_web::web;
use std::sync::Arc;
use std::time::Duration;

use amb_api::routes::signup::AppState;
use amb_core::services::verification::VerificationFlowConfig;
use amb_infra::email::{EmailDeliveryAdapter, MockEmailService};
use amb_infra::session::SessionRegistry;

pub type Delivery = EmailDeliveryAdapter<MockEmailService>;

pub struct TestContext {
    pub state: web::Data<AppState<Delivery>>,
    pub mail: Arc<MockEmailService>,
}

impl TestContext {
    pub fn new(code_delay: Duration, require_confirmation: bool) -> Self {
        let mail = Arc::new(MockEmailService::with_options(false, false));
        let delivery = Arc::new(EmailDeliveryAdapter::new(mail.clone()));
        let sessions = Arc::new(SessionRegistry::new(
            delivery,
            VerificationFlowConfig {
                code_delay,
                require_confirmation,
                login_location: "/login".to_string(),
            },
            Duration::from_secs(600),
        ));

        Self {
            state: web::Data::new(AppState::new(sessions)),
            mail,
        }
    }

    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, false)
    }

    /// Wait until the session's latest code is issued and mailed
    pub async fn settle(&self, session_id: &uuid::Uuid) {
        let flow = self
            .state
            .sessions
            .get(session_id)
            .await
            .expect("session should exist");
        flow.settle().await;
    }
}
