//! Bodies for the signup form endpoints
//!
//! Field names follow the form's contract (`sessionId`, `verificationCode`,
//! `confirmPassword`, ...). Validation here only bounds sizes; blank values
//! pass through so the domain reports them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use amb_core::domain::entities::{SignupForm, VerificationSession, VerificationState};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    /// Idle time after which the session is discarded
    pub expires_in_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RequestCodeRequest {
    pub session_id: Uuid,

    #[validate(length(max = 254))]
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCodeResponse {
    pub request_id: Uuid,
    pub email: String,
    pub ready_at: DateTime<Utc>,
    pub cancelled_previous: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmCodeRequest {
    pub session_id: Uuid,

    #[validate(length(max = 32))]
    #[serde(default)]
    pub verification_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmCodeResponse {
    pub confirmed: bool,
    pub message: String,
}

/// What the form shows for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub state: VerificationState,
    pub email: Option<String>,
    /// Content of the code field; the mock channel fills it in directly
    pub verification_code: Option<String>,
    pub pending: bool,
    pub delivery_error: Option<String>,
    pub signed_up: bool,
}

impl From<&VerificationSession> for SessionStatusResponse {
    fn from(session: &VerificationSession) -> Self {
        Self {
            state: session.state,
            email: session.email.clone(),
            verification_code: session.displayed_code(),
            pending: session.is_pending(),
            delivery_error: session.last_delivery_error.clone(),
            signed_up: session.signed_up_at.is_some(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub session_id: Uuid,

    #[validate(length(max = 50))]
    #[serde(default)]
    pub nickname: String,

    #[validate(length(max = 254))]
    #[serde(default)]
    pub email: String,

    #[validate(length(max = 128))]
    #[serde(default)]
    pub password: String,

    #[validate(length(max = 128))]
    #[serde(default)]
    pub confirm_password: String,
}

impl SignupRequest {
    pub fn to_form(&self) -> SignupForm {
        SignupForm::new(
            self.nickname.as_str(),
            self.email.as_str(),
            self.password.as_str(),
            self.confirm_password.as_str(),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub nickname: String,
    pub email: String,
    pub redirect_to: String,
    pub message: String,
}
