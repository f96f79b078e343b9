use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use amb_core::services::verification::CodeDeliveryTrait;
use amb_shared::email::mask_email;
use amb_shared::ApiResponse;

use super::AppState;
use crate::dto::{RequestCodeRequest, RequestCodeResponse};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::i18n::Language;
use crate::middleware::request_id;

/// Handler for POST /api/v1/email/validation
///
/// Schedules a verification code for the given email. The code is issued
/// after the configured delay; clients poll the status endpoint for it.
///
/// # Request Body
///
/// ```json
/// { "sessionId": "6f1c...", "email": "user@example.com" }
/// ```
///
/// # Responses
///
/// - `202 Accepted` with the request id and the time the code is expected
/// - `400` for a blank email, `404` for an unknown session
pub async fn request_code<D>(
    req: HttpRequest,
    state: web::Data<AppState<D>>,
    body: web::Json<RequestCodeRequest>,
) -> HttpResponse
where
    D: CodeDeliveryTrait + 'static,
{
    let request_id = request_id(&req);
    let lang = Language::from_request(&req);

    if let Err(errors) = body.validate() {
        log::warn!("[{}] Invalid code request: {:?}", request_id, errors);
        return validation_error_response(&errors, lang);
    }

    let flow = match state.flow(&body.session_id).await {
        Ok(flow) => flow,
        Err(error) => return handle_domain_error(&error, lang),
    };

    match flow.request_code(&body.email).await {
        Ok(receipt) => {
            log::info!(
                "[{}] Verification code scheduled for {} in session {}",
                request_id,
                mask_email(&receipt.email),
                body.session_id
            );

            HttpResponse::Accepted().json(
                ApiResponse::success(RequestCodeResponse {
                    request_id: receipt.request_id,
                    email: receipt.email,
                    ready_at: receipt.ready_at,
                    cancelled_previous: receipt.cancelled_previous,
                })
                .with_request_id(request_id),
            )
        }
        Err(error) => {
            log::warn!("[{}] Code request rejected: {}", request_id, error.code());
            handle_domain_error(&error, lang)
        }
    }
}
