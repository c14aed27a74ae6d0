use actix_web::HttpResponse;

use dc_shared::types::HealthResponse;

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "devcal-api",
        env!("CARGO_PKG_VERSION"),
    ))
}
