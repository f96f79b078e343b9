use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use amb_core::services::verification::CodeDeliveryTrait;
use amb_shared::ApiResponse;

use super::AppState;
use crate::dto::{ConfirmCodeRequest, ConfirmCodeResponse};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::i18n::Language;
use crate::middleware::request_id;

/// Handler for POST /api/v1/email/confirm
///
/// A wrong code is a normal answer (`200` with `confirmed: false`), not an
/// error. Only a blank code or an unknown session fail.
pub async fn confirm_code<D>(
    req: HttpRequest,
    state: web::Data<AppState<D>>,
    body: web::Json<ConfirmCodeRequest>,
) -> HttpResponse
where
    D: CodeDeliveryTrait + 'static,
{
    let request_id = request_id(&req);
    let lang = Language::from_request(&req);

    if let Err(errors) = body.validate() {
        log::warn!("[{}] Invalid confirmation: {:?}", request_id, errors);
        return validation_error_response(&errors, lang);
    }

    let flow = match state.flow(&body.session_id).await {
        Ok(flow) => flow,
        Err(error) => return handle_domain_error(&error, lang),
    };

    match flow.confirm_code(&body.verification_code) {
        Ok(outcome) => {
            log::info!(
                "[{}] Code confirmation in session {}: {:?}",
                request_id,
                body.session_id,
                outcome
            );

            HttpResponse::Ok().json(
                ApiResponse::success(ConfirmCodeResponse {
                    confirmed: outcome.is_confirmed(),
                    message: lang.localize(outcome.message()).to_string(),
                })
                .with_request_id(request_id),
            )
        }
        Err(error) => handle_domain_error(&error, lang),
    }
}
