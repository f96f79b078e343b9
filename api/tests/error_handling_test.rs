//! Request-level error handling and ambient endpoints

mod common;

use actix_web::{http::header, test};
use serde_json::{json, Value};

use amb_api::app::create_app;
use common::TestContext;

#[actix_web::test]
async fn test_health_check() {
    let ctx = TestContext::immediate();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_malformed_json_uses_error_body() {
    let ctx = TestContext::immediate();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/email/validation")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_oversized_field_fails_validation() {
    let ctx = TestContext::immediate();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/signup")
        .insert_header((header::ACCEPT_LANGUAGE, "ko"))
        .set_json(json!({
            "sessionId": uuid::Uuid::new_v4(),
            "nickname": "n".repeat(80),
            "email": "a@b.com",
            "password": "pw",
            "confirmPassword": "pw"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["fields"], json!(["nickname"]));
    assert_eq!(body["message"], "요청 데이터가 올바르지 않습니다.");
}

#[actix_web::test]
async fn test_unknown_route() {
    let ctx = TestContext::immediate();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/v2/nothing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_request_id_echoed_in_envelope() {
    let ctx = TestContext::immediate();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/signup/session")
        .insert_header(("X-Request-ID", "trace-7"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["request_id"], "trace-7");
    assert_eq!(body["data"]["expiresInSeconds"], 600);
}
