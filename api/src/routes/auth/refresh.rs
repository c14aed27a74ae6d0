use actix_web::{web, HttpRequest, HttpResponse};

use dc_core::repositories::{EventRepository, TokenRepository, UserRepository};
use dc_core::services::mail::MailServiceTrait;

use crate::app::AppState;
use crate::dto::auth::RefreshResponse;
use crate::handlers::handle_domain_error;

use super::refresh_token_header;

/// Handler for POST /refreshToken
///
/// Exchanges the refresh token in the `refreshtoken` header for a new access
/// token. The refresh token itself is not rotated.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "status": 200,
///     "message": "OK",
///     "accessToken": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing, malformed or expired refresh token
/// - 404 Not Found: Refresh token revoked (no stored record)
/// - 500 Internal Server Error: Storage or token signing failure
pub async fn refresh<U, T, M, E>(
    req: HttpRequest,
    state: web::Data<AppState<U, T, M, E>>,
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

    match state.auth_service.refresh_token(&refresh_token).await {
        Ok(access_token) => HttpResponse::Ok().json(RefreshResponse {
            status: 200,
            message: "OK".to_string(),
            access_token,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
