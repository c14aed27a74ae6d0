use actix_web::{web, HttpRequest, HttpResponse};

use dc_core::errors::TokenError;
use dc_core::repositories::{EventRepository, TokenRepository, UserRepository};
use dc_core::services::mail::MailServiceTrait;
use dc_shared::types::StatusResponse;

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::extract_bearer_token;

/// Handler for GET /verify
///
/// Reports whether the bearer access token is currently valid. Only the
/// signature and expiry are checked; the account is not looked up.
///
/// ## Errors
/// - 401 Unauthorized: Missing, malformed or expired access token
pub async fn verify<U, T, M, E>(
    req: HttpRequest,
    state: web::Data<AppState<U, T, M, E>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailServiceTrait + ?Sized + 'static,
    E: EventRepository + 'static,
{
    let Some(access_token) = extract_bearer_token(&req) else {
        return handle_domain_error(&TokenError::MissingToken.into());
    };

    match state.auth_service.verify_access_token(&access_token) {
        Ok(_) => HttpResponse::Ok().json(StatusResponse::ok("OK")),
        Err(error) => handle_domain_error(&error),
    }
}
