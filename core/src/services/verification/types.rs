//! Types for verification flow results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of requesting a verification code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestCodeReceipt {
    /// Identifier of this request
    pub request_id: Uuid,
    /// The trimmed email the code will be issued for
    pub email: String,
    /// When the code is expected to be issued
    pub ready_at: DateTime<Utc>,
    /// Whether an earlier request was still pending and got cancelled
    pub cancelled_previous: bool,
}

/// Outcome of comparing an entered code with the issued one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmOutcome {
    Confirmed,
    Mismatched,
}

impl ConfirmOutcome {
    pub fn is_confirmed(self) -> bool {
        matches!(self, ConfirmOutcome::Confirmed)
    }

    /// Bilingual notice for the presentation layer
    pub fn message(self) -> &'static str {
        match self {
            ConfirmOutcome::Confirmed => {
                "Email verification completed | 이메일 인증이 완료되었습니다."
            }
            ConfirmOutcome::Mismatched => {
                "Verification code does not match | 이메일 인증번호가 일치하지 않습니다."
            }
        }
    }
}

/// Result of an accepted signup submission
///
/// Nothing is stored; the caller is expected to send the user to `redirect_to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupOutcome {
    pub nickname: String,
    pub email: String,
    pub redirect_to: String,
    pub completed_at: DateTime<Utc>,
}

impl SignupOutcome {
    pub const MESSAGE: &'static str = "Signup completed | 회원가입이 완료되었습니다.";
}
