//! Application state and factory
//!
//! This module provides the factory for creating the Actix-web application
//! from an already initialised `AppState`.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use amb_core::services::verification::CodeDeliveryTrait;

use crate::handlers::json_error_handler;
use crate::middleware::{create_cors, RequestIdMiddleware};
use crate::routes::signup::{
    confirm_code::confirm_code, request_code::request_code, session::create_session,
    status::session_status, submit::submit_signup, AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<D>(
    app_state: web::Data<AppState<D>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    D: CodeDeliveryTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // The last wrap is outermost; the logger sees the echoed request id
        .wrap(RequestIdMiddleware)
        .wrap(create_cors())
        .wrap(Logger::new(r#"%a "%r" %s %b %T req=%{x-request-id}o"#))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .route("/signup/session", web::post().to(create_session::<D>))
                .route("/signup", web::post().to(submit_signup::<D>))
                .service(
                    web::scope("/email")
                        .route("/validation", web::post().to(request_code::<D>))
                        .route("/validation/{session}", web::get().to(session_status::<D>))
                        .route("/confirm", web::post().to(confirm_code::<D>)),
                )
                .route("/", web::get().to(api_documentation)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "ambition-signup-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Ambition signup API v1",
        "endpoints": {
            "health": "/health",
            "signup": {
                "create_session": {
                    "path": "/api/v1/signup/session",
                    "method": "POST",
                    "responses": { "201": "Session opened, returns sessionId" }
                },
                "submit": {
                    "path": "/api/v1/signup",
                    "method": "POST",
                    "request_body": {
                        "sessionId": "uuid",
                        "nickname": "string",
                        "email": "string",
                        "password": "string",
                        "confirmPassword": "string"
                    },
                    "responses": {
                        "200": "Signup accepted, returns redirectTo",
                        "400": "Missing field or passwords differ",
                        "403": "Email not verified",
                        "404": "Unknown session"
                    }
                }
            },
            "email": {
                "request_code": {
                    "path": "/api/v1/email/validation",
                    "method": "POST",
                    "request_body": { "sessionId": "uuid", "email": "string" },
                    "responses": {
                        "202": "Code scheduled",
                        "400": "Empty email",
                        "404": "Unknown session"
                    }
                },
                "status": {
                    "path": "/api/v1/email/validation/{session}",
                    "method": "GET",
                    "responses": { "200": "Verification state and displayed code" }
                },
                "confirm_code": {
                    "path": "/api/v1/email/confirm",
                    "method": "POST",
                    "request_body": { "sessionId": "uuid", "verificationCode": "string" },
                    "responses": {
                        "200": "Confirmation outcome",
                        "400": "Empty code",
                        "404": "Unknown session"
                    }
                }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "NOT_FOUND",
        "message": "The requested resource was not found"
    }))
}
