//! Per-form verification session.
//!
//! One session tracks a single user's pass through the signup page: the
//! latest code request, the code issued for it, and whether that code has
//! been confirmed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::verification_attempt::VerificationAttempt;

/// Where the verification sub-flow currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A code was requested and has not been issued yet
    CodeRequested,
    /// A code was issued and not yet checked
    CodeIssued,
    /// The last entered code matched
    Confirmed,
    /// The last entered code did not match
    Mismatched,
}

/// In-memory state of one form session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSession {
    pub state: VerificationState,

    /// Email of the most recent code request
    pub email: Option<String>,

    /// Request whose code is still being prepared
    pub pending_request: Option<Uuid>,

    /// The code issued for the most recent request
    pub attempt: Option<VerificationAttempt>,

    /// Request whose issued code is still being mailed
    pub delivering: Option<Uuid>,

    /// Why the most recent delivery failed, if it did
    pub last_delivery_error: Option<String>,

    /// When the signup form was accepted
    pub signed_up_at: Option<DateTime<Utc>>,
}

impl VerificationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding any earlier code or pending request
    pub fn begin_request(&mut self, request_id: Uuid, email: impl Into<String>) {
        self.state = VerificationState::CodeRequested;
        self.email = Some(email.into());
        self.pending_request = Some(request_id);
        self.attempt = None;
        self.delivering = None;
        self.last_delivery_error = None;
    }

    /// Stores an issued code if it belongs to the current request
    ///
    /// Returns `false` and leaves the session untouched when the request was
    /// superseded in the meantime.
    pub fn issue(&mut self, attempt: VerificationAttempt) -> bool {
        if self.pending_request != Some(attempt.id) {
            return false;
        }
        self.pending_request = None;
        self.delivering = Some(attempt.id);
        self.state = VerificationState::CodeIssued;
        self.attempt = Some(attempt);
        true
    }

    /// Records the outcome of mailing the code for `request_id`
    ///
    /// Ignored when a newer request has replaced it.
    pub fn finish_delivery(&mut self, request_id: Uuid, error: Option<String>) {
        if self.delivering != Some(request_id) {
            return;
        }
        self.delivering = None;
        self.last_delivery_error = error;
    }

    pub fn is_pending(&self) -> bool {
        self.pending_request.is_some()
    }

    /// No code is being prepared or mailed
    pub fn is_settled(&self) -> bool {
        !self.is_pending() && self.delivering.is_none()
    }

    /// Compares an entered code with the issued one
    ///
    /// Without an issued code this is always a mismatch and the state is
    /// left as it was.
    pub fn confirm(&mut self, entered: &str, now: DateTime<Utc>) -> bool {
        let Some(attempt) = self.attempt.as_mut() else {
            return false;
        };

        if attempt.matches(entered) {
            attempt.confirmed_at = Some(now);
            self.state = VerificationState::Confirmed;
            true
        } else {
            attempt.confirmed_at = None;
            self.state = VerificationState::Mismatched;
            false
        }
    }

    /// Whether `email` has a confirmed code in this session
    pub fn is_confirmed_for(&self, email: &str) -> bool {
        self.state == VerificationState::Confirmed
            && self
                .attempt
                .as_ref()
                .is_some_and(|a| a.is_confirmed() && a.email == email.trim())
    }

    /// The code as it would appear in the form's code field
    pub fn displayed_code(&self) -> Option<String> {
        self.attempt.as_ref().map(VerificationAttempt::code_string)
    }

    pub fn record_signup(&mut self, at: DateTime<Utc>) {
        self.signed_up_at = Some(at);
    }
}
