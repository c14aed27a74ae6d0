//! Integration tests for the access-token gate on `/api`

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};

use common::{bearer, context};
use dc_core::repositories::UserRepository;

#[actix_web::test]
async fn test_gate_rejects_missing_token() {
    let ctx = context();
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/api/events").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 401);
    assert_eq!(body["error"], "MISSING_TOKEN");
    assert_eq!(body["message"], "Missing authentication token");
}

#[actix_web::test]
async fn test_gate_rejects_malformed_header() {
    let ctx = context();
    let app = init_app!(ctx);
    let (access_token, _) = register_user!(&app);

    // Token without the Bearer scheme
    let req = test::TestRequest::get()
        .uri("/api/events")
        .insert_header(("Authorization", access_token.as_str()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/events")
        .insert_header(bearer("abc.def.ghi"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");
}

#[actix_web::test]
async fn test_gate_rejects_refresh_token() {
    let ctx = context();
    let app = init_app!(ctx);
    let (_, refresh_token) = register_user!(&app);

    let req = test::TestRequest::get()
        .uri("/api/events")
        .insert_header(bearer(&refresh_token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_gate_passes_valid_token() {
    let ctx = context();
    let app = init_app!(ctx);
    let (access_token, _) = register_user!(&app);

    let req = test::TestRequest::get()
        .uri("/api/events")
        .insert_header(bearer(&access_token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_gate_user_removed_after_issue() {
    let ctx = context();
    let app = init_app!(ctx);
    let (access_token, _) = register_user!(&app);

    let user = ctx
        .users
        .find_by_email(common::TEST_EMAIL)
        .await
        .unwrap()
        .unwrap();
    ctx.users.remove(user.id).await;

    let req = test::TestRequest::get()
        .uri("/api/events")
        .insert_header(bearer(&access_token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "USER_NOT_FOUND");
}

#[actix_web::test]
async fn test_gate_store_failure() {
    let ctx = context();
    let app = init_app!(ctx);
    let (access_token, _) = register_user!(&app);
    ctx.users.set_unavailable(true);

    let req = test::TestRequest::get()
        .uri("/api/events")
        .insert_header(bearer(&access_token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INTERNAL_ERROR");
    assert_eq!(body["message"], "Internal server error");
}

#[actix_web::test]
async fn test_public_routes_skip_gate() {
    let ctx = context();
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}
