use actix_web::{web, HttpRequest, HttpResponse};

use dc_core::repositories::{EventRepository, TokenRepository, UserRepository};
use dc_core::services::mail::MailServiceTrait;
use dc_shared::types::StatusResponse;

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

use super::refresh_token_header;

/// Handler for POST /api/logout
///
/// Revokes the refresh token in the `refreshtoken` header. Requires a valid
/// access token in the `Authorization` header. Access tokens already issued
/// stay valid until they expire.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// refreshtoken: {refresh_token}
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "status": 200,
///     "message": "User logged out"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid access or refresh token
/// - 500 Internal Server Error: Token revocation failure
pub async fn logout<U, T, M, E>(
    req: HttpRequest,
    state: web::Data<AppState<U, T, M, E>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailServiceTrait + ?Sized + 'static,
    E: EventRepository + 'static,
{
    let refresh_token = match refresh_token_header(&req) {
        Ok(token) => token,
        Err(error) => return handle_domain_error(&error),
    };

    match state.auth_service.logout(&refresh_token).await {
        Ok(revoked) => {
            tracing::debug!(user_id = %auth.user_id, revoked, "Logout processed");
            HttpResponse::Ok().json(StatusResponse::ok("User logged out"))
        }
        Err(error) => handle_domain_error(&error),
    }
}
