//! Verification attempt entity for email-based signup confirmation.

use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exclusive upper bound of a verification code
pub const CODE_UPPER_BOUND: u32 = 100_000;

/// A code issued for one email address in response to one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationAttempt {
    /// Identifier of the request that produced this code
    pub id: Uuid,

    /// Email the code was requested for (trimmed, format not checked)
    pub email: String,

    /// The numeric code, always below `CODE_UPPER_BOUND`
    pub code: u32,

    /// When the code was issued
    pub issued_at: DateTime<Utc>,

    /// When the code was last confirmed, if it currently is
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl VerificationAttempt {
    /// Issues a new attempt with a freshly generated code
    pub fn issue(request_id: Uuid, email: impl Into<String>) -> Self {
        Self::with_code(request_id, email, Self::generate_code())
    }

    /// Builds an attempt around a known code
    pub fn with_code(request_id: Uuid, email: impl Into<String>, code: u32) -> Self {
        Self {
            id: request_id,
            email: email.into(),
            code: code % CODE_UPPER_BOUND,
            issued_at: Utc::now(),
            confirmed_at: None,
        }
    }

    /// Generates a pseudo-random code in `[0, CODE_UPPER_BOUND)`
    pub fn generate_code() -> u32 {
        rand::thread_rng().gen_range(0..CODE_UPPER_BOUND)
    }

    /// The code as the user sees it: plain decimal, no zero padding
    pub fn code_string(&self) -> String {
        self.code.to_string()
    }

    /// Whether `entered` is exactly the code's decimal string
    pub fn matches(&self, entered: &str) -> bool {
        constant_time_eq(entered.as_bytes(), self.code_string().as_bytes())
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed_at.is_some()
    }
}
