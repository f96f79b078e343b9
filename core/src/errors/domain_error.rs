//! Validation errors raised by the signup form and verification flow
//!
//! Every message is bilingual in the form `"English | 한국어"`; the
//! presentation layer picks the half it needs.

use amb_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Validation errors with bilingual messages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your email | 이메일을 입력해주세요.")]
    EmptyEmail,

    #[error("Please enter the verification code | 이메일 인증번호를 입력해주세요.")]
    EmptyCode,

    #[error("Please fill in all fields (missing: {field}) | 모든 필드를 입력해주세요. (누락: {field})")]
    MissingField { field: String },

    #[error("Passwords do not match | 비밀번호가 일치하지 않습니다.")]
    PasswordMismatch,

    #[error("Email verification has not been completed | 이메일 인증이 완료되지 않았습니다.")]
    EmailNotVerified,
}

impl ValidationError {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyEmail => error_codes::EMPTY_EMAIL,
            ValidationError::EmptyCode => error_codes::EMPTY_CODE,
            ValidationError::MissingField { .. } => error_codes::MISSING_FIELD,
            ValidationError::PasswordMismatch => error_codes::PASSWORD_MISMATCH,
            ValidationError::EmailNotVerified => error_codes::EMAIL_NOT_VERIFIED,
        }
    }
}

impl IntoErrorResponse for ValidationError {
    fn to_error_response(&self) -> ErrorResponse {
        let response = ErrorResponse::new(self.code(), self.to_string());
        match self {
            ValidationError::MissingField { field } => response.add_detail("field", field),
            _ => response,
        }
    }
}

/// Extract the English half of a bilingual message
pub fn extract_english_message(message: &str) -> &str {
    message.split(" | ").next().unwrap_or(message)
}

/// Extract the Korean half of a bilingual message
pub fn extract_korean_message(message: &str) -> &str {
    message.split(" | ").nth(1).unwrap_or(message)
}
