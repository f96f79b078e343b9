use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use amb_core::services::verification::CodeDeliveryTrait;
use amb_shared::ApiResponse;

use super::AppState;
use crate::dto::SessionStatusResponse;
use crate::handlers::handle_domain_error;
use crate::i18n::Language;
use crate::middleware::request_id;

/// Handler for GET /api/v1/email/validation/{session}
///
/// Reports the verification state of a session, including the issued code
/// the form's code field would show.
pub async fn session_status<D>(
    req: HttpRequest,
    state: web::Data<AppState<D>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    D: CodeDeliveryTrait + 'static,
{
    let session_id = path.into_inner();

    match state.flow(&session_id).await {
        Ok(flow) => HttpResponse::Ok().json(
            ApiResponse::success(SessionStatusResponse::from(&flow.snapshot()))
                .with_request_id(request_id(&req)),
        ),
        Err(error) => handle_domain_error(&error, Language::from_request(&req)),
    }
}
