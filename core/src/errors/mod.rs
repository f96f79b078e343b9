//! Domain-specific error types and error handling.

mod domain_error;

// Re-export all error types and utilities
pub use domain_error::{extract_english_message, extract_korean_message, ValidationError};

use amb_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Resource not found: {resource} | 리소스를 찾을 수 없습니다: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message} | 내부 오류: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Validation(err) => err.code(),
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            DomainError::Validation(err) => err.to_error_response(),
            _ => ErrorResponse::new(self.code(), self.to_string()),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
