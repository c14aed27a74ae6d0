//! CORS middleware configuration for cross-origin requests.
//!
//! Built from `server.cors`: `*` in `allowed_origins` accepts any origin,
//! otherwise only the listed origins are allowed.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use dc_shared::config::CorsConfig;

/// Custom header carrying the refresh token on `/refreshToken` and `/api/logout`
pub const REFRESH_TOKEN_HEADER: &str = "refreshtoken";

/// Creates a CORS middleware instance from configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static(REFRESH_TOKEN_HEADER),
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::info!("CORS: allowing any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in config.allowed_origins.iter().map(|s| s.trim()) {
            if !origin.is_empty() {
                tracing::info!("CORS: adding allowed origin {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
