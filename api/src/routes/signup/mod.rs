//! Signup form route handlers
//!
//! This module contains the endpoints the signup page talks to:
//! - Form session creation
//! - Email verification (requesting, confirming, and polling the code)
//! - Signup submission

pub mod confirm_code;
pub mod request_code;
pub mod session;
pub mod status;
pub mod submit;

use std::sync::Arc;
use uuid::Uuid;

use amb_core::errors::{DomainError, DomainResult};
use amb_core::services::verification::{CodeDeliveryTrait, VerificationFlow};
use amb_infra::session::SessionRegistry;

/// Application state that holds shared services
pub struct AppState<D: CodeDeliveryTrait> {
    pub sessions: Arc<SessionRegistry<D>>,
}

impl<D: CodeDeliveryTrait + 'static> AppState<D> {
    pub fn new(sessions: Arc<SessionRegistry<D>>) -> Self {
        Self { sessions }
    }

    /// Flow of an open session
    ///
    /// # Errors
    ///
    /// `DomainError::NotFound` when the session is unknown or has expired.
    pub async fn flow(&self, session_id: &Uuid) -> DomainResult<Arc<VerificationFlow<D>>> {
        self.sessions
            .get(session_id)
            .await
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("signup session {}", session_id),
            })
    }
}
