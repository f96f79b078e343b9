//! Conversion of domain and request errors into HTTP responses
//!
//! Every error body is the shared `ErrorResponse`, with the message reduced
//! to the caller's language.

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use amb_core::errors::{DomainError, ValidationError};
use amb_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};

use crate::i18n::Language;

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation(ValidationError::EmailNotVerified) => StatusCode::FORBIDDEN,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render a domain error in the requested language
pub fn handle_domain_error(error: &DomainError, lang: Language) -> HttpResponse {
    let status = status_for(error);
    if status.is_server_error() {
        log::error!("Domain error: {:?}", error);
    } else {
        log::debug!("Domain error: {:?}", error);
    }

    let mut body = error.to_error_response();
    body.message = lang.localize(&body.message).to_string();

    HttpResponse::build(status).json(body)
}

/// Render `validator` failures as a 400 with the offending fields listed
pub fn validation_error_response(errors: &ValidationErrors, lang: Language) -> HttpResponse {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();

    let message = match lang {
        Language::English => "Invalid request data",
        Language::Korean => "요청 데이터가 올바르지 않습니다.",
    };

    HttpResponse::BadRequest()
        .json(ErrorResponse::new(error_codes::VALIDATION_ERROR, message).add_detail("fields", fields))
}

/// `JsonConfig` error handler producing the shared error body
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let lang = Language::from_request(req);
    let message = match lang {
        Language::English => "Malformed request body",
        Language::Korean => "요청 본문 형식이 올바르지 않습니다.",
    };
    let body = ErrorResponse::new(error_codes::BAD_REQUEST, message).add_detail("reason", err.to_string());

    actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&ValidationError::EmptyEmail.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ValidationError::EmailNotVerified.into()),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_for(&DomainError::NotFound {
                resource: "session".to_string()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DomainError::Internal {
                message: "boom".to_string()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_domain_error_is_localized() {
        let error: DomainError = ValidationError::PasswordMismatch.into();

        let response = handle_domain_error(&error, Language::Korean);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "PASSWORD_MISMATCH");
        assert_eq!(body["message"], "비밀번호가 일치하지 않습니다.");
    }

    #[actix_web::test]
    async fn test_missing_field_keeps_detail() {
        let error: DomainError = ValidationError::MissingField {
            field: "nickname".to_string(),
        }
        .into();

        let response = handle_domain_error(&error, Language::English);
        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["details"]["field"], "nickname");
        assert_eq!(body["message"], "Please fill in all fields (missing: nickname)");
    }
}
