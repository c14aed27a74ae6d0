//! Shared setup for API integration tests

#![allow(dead_code, unused_macros)]

use std::sync::Arc;

use actix_web::web;

use dc_api::AppState;
use dc_core::repositories::{MockEventRepository, MockTokenRepository, MockUserRepository};
use dc_core::services::{
    AuthService, AuthServiceConfig, EventService, RecordingMailService, TokenService,
    TokenServiceConfig,
};
use dc_shared::config::{CorsConfig, ServerConfig};

pub type TestState =
    AppState<MockUserRepository, MockTokenRepository, RecordingMailService, MockEventRepository>;

pub const TEST_EMAIL: &str = "dev@example.com";
pub const TEST_USERNAME: &str = "devuser";
pub const TEST_PASSWORD: &str = "secret1";

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub server: ServerConfig,
    pub users: MockUserRepository,
    pub tokens: MockTokenRepository,
    pub events: MockEventRepository,
    pub mail: RecordingMailService,
}

pub fn context() -> TestContext {
    context_with(TokenServiceConfig {
        jwt_secret: "api-test-secret".to_string(),
        ..Default::default()
    })
}

pub fn context_with(token_config: TokenServiceConfig) -> TestContext {
    let users = MockUserRepository::new();
    let tokens = MockTokenRepository::new();
    let events = MockEventRepository::new();
    let mail = RecordingMailService::new();

    let token_service = TokenService::new(tokens.clone(), token_config).unwrap();
    let auth_service = AuthService::new(
        Arc::new(users.clone()),
        Arc::new(token_service),
        Arc::new(mail.clone()),
        AuthServiceConfig {
            bcrypt_cost: 4,
            ..Default::default()
        },
    );
    let event_service = EventService::new(Arc::new(events.clone()));

    TestContext {
        state: web::Data::new(AppState::new(Arc::new(auth_service), Arc::new(event_service))),
        server: ServerConfig {
            cors: CorsConfig::development(),
            ..ServerConfig::default()
        },
        users,
        tokens,
        events,
        mail,
    }
}

pub fn register_body() -> serde_json::Value {
    serde_json::json!({
        "email": TEST_EMAIL,
        "username": TEST_USERNAME,
        "password": TEST_PASSWORD,
    })
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Build the application service for a [`TestContext`]
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(dc_api::create_app($ctx.state.clone(), &$ctx.server)).await
    };
}

/// Register the default test user, returning `(access_token, refresh_token)`
macro_rules! register_user {
    ($app:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/register")
            .set_json(crate::common::register_body())
            .to_request();
        let body: serde_json::Value = actix_web::test::call_and_read_body_json($app, req).await;
        (
            body["access_token"].as_str().unwrap().to_string(),
            body["refresh_token"].as_str().unwrap().to_string(),
        )
    }};
}
