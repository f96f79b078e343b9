use actix_web::{http::header, web, HttpRequest, HttpResponse};
use validator::Validate;

use amb_core::services::verification::{CodeDeliveryTrait, SignupOutcome};
use amb_shared::email::mask_email;
use amb_shared::ApiResponse;

use super::AppState;
use crate::dto::{SignupRequest, SignupResponse};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::i18n::Language;
use crate::middleware::request_id;

/// Handler for POST /api/v1/signup
///
/// Validates the form and answers with where the client should go next.
/// Nothing is stored.
///
/// # Responses
///
/// - `200 OK` with `redirectTo` and a matching `Location` header
/// - `400` for blank fields or differing passwords
/// - `403` when confirmation is required and the email is not confirmed
/// - `404` for an unknown session
pub async fn submit_signup<D>(
    req: HttpRequest,
    state: web::Data<AppState<D>>,
    body: web::Json<SignupRequest>,
) -> HttpResponse
where
    D: CodeDeliveryTrait + 'static,
{
    let request_id = request_id(&req);
    let lang = Language::from_request(&req);

    if let Err(errors) = body.validate() {
        log::warn!("[{}] Invalid signup body: {:?}", request_id, errors);
        return validation_error_response(&errors, lang);
    }

    let flow = match state.flow(&body.session_id).await {
        Ok(flow) => flow,
        Err(error) => return handle_domain_error(&error, lang),
    };

    match flow.submit_signup(&body.to_form()) {
        Ok(outcome) => {
            log::info!(
                "[{}] Signup completed for {} in session {}",
                request_id,
                mask_email(&outcome.email),
                body.session_id
            );

            HttpResponse::Ok()
                .insert_header((header::LOCATION, outcome.redirect_to.clone()))
                .json(
                    ApiResponse::success(SignupResponse {
                        nickname: outcome.nickname,
                        email: outcome.email,
                        redirect_to: outcome.redirect_to,
                        message: lang.localize(SignupOutcome::MESSAGE).to_string(),
                    })
                    .with_request_id(request_id),
                )
        }
        Err(error) => {
            log::warn!("[{}] Signup rejected: {}", request_id, error.code());
            handle_domain_error(&error, lang)
        }
    }
}
