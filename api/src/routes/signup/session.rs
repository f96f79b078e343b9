use actix_web::{web, HttpRequest, HttpResponse};

use amb_core::services::verification::CodeDeliveryTrait;
use amb_shared::ApiResponse;

use super::AppState;
use crate::dto::CreateSessionResponse;
use crate::middleware::request_id;

/// Handler for POST /api/v1/signup/session
///
/// Opens a form session. Every other signup endpoint takes the returned
/// `sessionId`.
pub async fn create_session<D>(req: HttpRequest, state: web::Data<AppState<D>>) -> HttpResponse
where
    D: CodeDeliveryTrait + 'static,
{
    let request_id = request_id(&req);
    let (session_id, _) = state.sessions.create().await;

    log::info!("[{}] Opened signup session {}", request_id, session_id);

    HttpResponse::Created().json(
        ApiResponse::success(CreateSessionResponse {
            session_id,
            expires_in_seconds: state.sessions.ttl().as_secs(),
        })
        .with_request_id(request_id),
    )
}
