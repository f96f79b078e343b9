//! Main verification flow implementation

use chrono::Utc;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

use amb_shared::email::mask_email;

use crate::domain::entities::{SignupForm, VerificationAttempt, VerificationSession};
use crate::errors::{DomainResult, ValidationError};

use super::config::VerificationFlowConfig;
use super::traits::CodeDeliveryTrait;
use super::types::{ConfirmOutcome, RequestCodeReceipt, SignupOutcome};

/// Verification flow for one signup form session
///
/// The flow owns the session state and the task preparing the most recent
/// code. All three user operations go through it.
pub struct VerificationFlow<D: CodeDeliveryTrait> {
    /// Channel the issued code is delivered through
    delivery: Arc<D>,
    /// Flow configuration
    config: VerificationFlowConfig,
    /// Session state, observable through `watch` receivers
    session: Arc<watch::Sender<VerificationSession>>,
    /// Task issuing the code for the pending request
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<D: CodeDeliveryTrait + 'static> VerificationFlow<D> {
    /// Create a new verification flow with an idle session
    pub fn new(delivery: Arc<D>, config: VerificationFlowConfig) -> Self {
        let (session, _) = watch::channel(VerificationSession::new());
        Self {
            delivery,
            config,
            session: Arc::new(session),
            pending: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &VerificationFlowConfig {
        &self.config
    }

    /// Request a verification code for `email`
    ///
    /// The code is issued after the configured delay by a background task.
    /// Any earlier request that has not been issued yet is cancelled, and
    /// any earlier code stops being valid immediately.
    ///
    /// # Errors
    ///
    /// `ValidationError::EmptyEmail` when `email` is blank. Nothing is
    /// scheduled in that case.
    pub async fn request_code(&self, email: &str) -> DomainResult<RequestCodeReceipt> {
        let email = email.trim();
        if email.is_empty() {
            tracing::warn!(event = "code_request_rejected", "Code request rejected: empty email");
            return Err(ValidationError::EmptyEmail.into());
        }

        let request_id = Uuid::new_v4();
        let email = email.to_string();

        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        let cancelled_previous = match pending.take() {
            Some(previous) if !previous.is_finished() => {
                previous.abort();
                tracing::info!(
                    event = "code_request_cancelled",
                    "Cancelled pending code request superseded by a new one"
                );
                true
            }
            _ => false,
        };

        self.session
            .send_modify(|session| session.begin_request(request_id, email.clone()));

        *pending = Some(tokio::spawn(issue_after_delay(
            Arc::clone(&self.delivery),
            Arc::clone(&self.session),
            request_id,
            email.clone(),
            self.config.code_delay,
        )));
        drop(pending);

        tracing::info!(
            email = %mask_email(&email),
            request_id = %request_id,
            delay_ms = self.config.code_delay.as_millis() as u64,
            event = "code_requested",
            "Verification code requested"
        );

        let delay = chrono::Duration::from_std(self.config.code_delay)
            .unwrap_or_else(|_| chrono::Duration::zero());

        Ok(RequestCodeReceipt {
            request_id,
            email,
            ready_at: Utc::now() + delay,
            cancelled_previous,
        })
    }

    /// Compare an entered code with the most recently issued one
    ///
    /// A mismatch, including the case where no code has been issued yet, is
    /// a normal outcome rather than an error.
    ///
    /// # Errors
    ///
    /// `ValidationError::EmptyCode` when `entered` is blank. No comparison
    /// happens in that case.
    pub fn confirm_code(&self, entered: &str) -> DomainResult<ConfirmOutcome> {
        if entered.trim().is_empty() {
            tracing::warn!(event = "code_confirm_rejected", "Code confirmation rejected: empty code");
            return Err(ValidationError::EmptyCode.into());
        }

        let now = Utc::now();
        let mut matched = false;
        self.session.send_modify(|session| matched = session.confirm(entered, now));

        if matched {
            tracing::info!(event = "code_confirmed", "Verification code confirmed");
            Ok(ConfirmOutcome::Confirmed)
        } else {
            tracing::info!(event = "code_mismatch", "Verification code did not match");
            Ok(ConfirmOutcome::Mismatched)
        }
    }

    /// Validate and accept the signup form
    ///
    /// Nothing is persisted. Unless `require_confirmation` is set, the
    /// verification state is not consulted.
    ///
    /// # Errors
    ///
    /// - `ValidationError::MissingField` for the first blank field
    /// - `ValidationError::PasswordMismatch` when the passwords differ
    /// - `ValidationError::EmailNotVerified` when confirmation is required
    ///   and the form's email has no confirmed code
    pub fn submit_signup(&self, form: &SignupForm) -> DomainResult<SignupOutcome> {
        if let Err(err) = form.validate() {
            tracing::warn!(
                event = "signup_rejected",
                reason = err.code(),
                "Signup form rejected"
            );
            return Err(err.into());
        }

        if self.config.require_confirmation && !self.session.borrow().is_confirmed_for(&form.email) {
            tracing::warn!(
                email = %mask_email(&form.email),
                event = "signup_rejected",
                reason = ValidationError::EmailNotVerified.code(),
                "Signup attempted without a confirmed email"
            );
            return Err(ValidationError::EmailNotVerified.into());
        }

        let completed_at = Utc::now();
        self.session.send_modify(|session| session.record_signup(completed_at));

        tracing::info!(
            email = %mask_email(&form.email),
            event = "signup_completed",
            "Signup completed"
        );

        Ok(SignupOutcome {
            nickname: form.nickname.trim().to_string(),
            email: form.email.trim().to_string(),
            redirect_to: self.config.login_location.clone(),
            completed_at,
        })
    }

    /// Current session state
    pub fn snapshot(&self) -> VerificationSession {
        self.session.borrow().clone()
    }

    /// Subscribe to session changes
    pub fn subscribe(&self) -> watch::Receiver<VerificationSession> {
        self.session.subscribe()
    }

    /// Wait until the latest code is issued and its delivery has finished
    pub async fn settle(&self) -> VerificationSession {
        let mut receiver = self.session.subscribe();
        let settled = match receiver.wait_for(VerificationSession::is_settled).await {
            Ok(session) => session.clone(),
            Err(_) => self.snapshot(),
        };
        settled
    }
}

impl<D: CodeDeliveryTrait> Drop for VerificationFlow<D> {
    fn drop(&mut self) {
        let pending = self.pending.get_mut().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

/// Issue the code for `request_id` after `delay`, then deliver it
///
/// The session only accepts the code while `request_id` is still the
/// pending request; a superseded task stops without delivering.
async fn issue_after_delay<D: CodeDeliveryTrait>(
    delivery: Arc<D>,
    session: Arc<watch::Sender<VerificationSession>>,
    request_id: Uuid,
    email: String,
    delay: Duration,
) {
    tokio::time::sleep(delay).await;

    let attempt = VerificationAttempt::issue(request_id, email.clone());
    let code = attempt.code_string();
    if !session.send_if_modified(|session| session.issue(attempt)) {
        tracing::debug!(
            request_id = %request_id,
            "Dropping code for a superseded request"
        );
        return;
    }

    tracing::info!(
        email = %mask_email(&email),
        request_id = %request_id,
        event = "code_issued",
        "Verification code issued"
    );

    let failure = match delivery.deliver_code(&email, &code).await {
        Ok(message_id) => {
            tracing::info!(
                email = %mask_email(&email),
                message_id = %message_id,
                event = "code_delivered",
                "Verification code delivered"
            );
            None
        }
        Err(error) => {
            tracing::warn!(
                email = %mask_email(&email),
                error = %error,
                event = "code_delivery_failed",
                "Failed to deliver verification code"
            );
            Some(error)
        }
    };
    session.send_modify(|session| session.finish_delivery(request_id, failure));
}
