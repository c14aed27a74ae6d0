use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};

use dc_api::{create_app, telemetry, AppState};
use dc_core::services::{
    AuthService, AuthServiceConfig, EventService, TokenCleanupConfig, TokenCleanupService,
    TokenService, TokenServiceConfig,
};
use dc_infra::database::{
    DatabasePool, MySqlEventRepository, MySqlTokenRepository, MySqlUserRepository,
};
use dc_infra::mail::create_mail_service;
use dc_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    telemetry::init_tracing(&config.logging)?;

    info!(environment = %config.environment, "Starting DevCal API server");
    if config.auth.jwt.is_using_default_secret() {
        warn!("Using the built-in development JWT secret; set DEVCAL__AUTH__JWT__SECRET");
    }

    // Database
    info!("Connecting to {}", config.database.redacted_url());
    let database = DatabasePool::new(config.database.clone()).await?;
    if config.database.run_migrations {
        database.run_migrations().await?;
    }
    info!("Database pool ready: {}", database.statistics());
    let pool = database.get_pool().clone();

    // Repositories
    let user_repository = MySqlUserRepository::new(pool.clone());
    let token_repository = MySqlTokenRepository::new(pool.clone());
    let event_repository = MySqlEventRepository::new(pool);

    // Services
    let token_service = TokenService::new(
        token_repository.clone(),
        TokenServiceConfig::from(&config.auth.jwt),
    )?;
    let mail_service = create_mail_service(&config.mail);
    let auth_service = AuthService::new(
        Arc::new(user_repository),
        Arc::new(token_service),
        mail_service,
        AuthServiceConfig::from_settings(&config.auth.password, &config.mail),
    );
    let event_service = EventService::new(Arc::new(event_repository));

    let cleanup = Arc::new(TokenCleanupService::new(
        Arc::new(token_repository),
        TokenCleanupConfig::from(&config.auth.cleanup),
    ));
    let _purge_task = cleanup.spawn();

    let state = web::Data::new(AppState::new(Arc::new(auth_service), Arc::new(event_service)));
    let server_config = config.server.clone();
    let bind_address = config.server.bind_address();

    info!(
        workers = config.server.worker_count(),
        "Server will bind to: {}", bind_address
    );

    HttpServer::new(move || create_app(state.clone(), &server_config))
        .workers(config.server.worker_count())
        .keep_alive(Duration::from_secs(config.server.keep_alive))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    database.close().await;
    info!("Server stopped");
    Ok(())
}
