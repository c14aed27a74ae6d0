//! Application state and factory
//!
//! This module holds the shared application state and the factory that
//! builds the Actix-web application. Every route is registered here.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::StatusCode,
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use dc_core::repositories::{EventRepository, TokenRepository, UserRepository};
use dc_core::services::{mail::MailServiceTrait, AuthService, EventService};
use dc_shared::config::ServerConfig;
use dc_shared::errors::error_codes;

use crate::handlers::error::{error_response, json_error_handler};
use crate::middleware::{auth::AccessGate, cors::create_cors, JwtAuth};
use crate::routes::{auth, events, health};

/// Application state shared by all workers
pub struct AppState<U, T, M, E>
where
    U: UserRepository,
    T: TokenRepository,
    M: MailServiceTrait + ?Sized,
    E: EventRepository,
{
    pub auth_service: Arc<AuthService<U, T, M>>,
    pub event_service: Arc<EventService<E>>,
}

impl<U, T, M, E> AppState<U, T, M, E>
where
    U: UserRepository,
    T: TokenRepository,
    M: MailServiceTrait + ?Sized,
    E: EventRepository,
{
    pub fn new(auth_service: Arc<AuthService<U, T, M>>, event_service: Arc<EventService<E>>) -> Self {
        Self {
            auth_service,
            event_service,
        }
    }
}

/// Create and configure the application with all dependencies
///
/// Public routes sit at the root; everything under `/api` goes through the
/// access-token gate first.
pub fn create_app<U, T, M, E>(
    app_state: web::Data<AppState<U, T, M, E>>,
    server: &ServerConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailServiceTrait + ?Sized + 'static,
    E: EventRepository + 'static,
{
    let gate: Arc<dyn AccessGate> = app_state.auth_service.clone();

    let json_config = web::JsonConfig::default()
        .limit(server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // Last wrap runs first: the request span encloses CORS
        .wrap(create_cors(&server.cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health::health_check))
        .route("/register", web::post().to(auth::register::register::<U, T, M, E>))
        .route("/login", web::post().to(auth::login::login::<U, T, M, E>))
        .route("/refreshToken", web::post().to(auth::refresh::refresh::<U, T, M, E>))
        .route("/verify", web::get().to(auth::verify::verify::<U, T, M, E>))
        .service(
            web::scope("/api")
                .wrap(JwtAuth::new(gate))
                .route("/logout", web::post().to(auth::logout::logout::<U, T, M, E>))
                .route("/events", web::get().to(events::list::list_events::<U, T, M, E>))
                .route("/events", web::post().to(events::create::create_event::<U, T, M, E>))
                .route("/events", web::delete().to(events::remove::delete_event::<U, T, M, E>)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    )
}
