use actix_web::{web, HttpResponse};
use validator::Validate;

use dc_core::repositories::{EventRepository, TokenRepository, UserRepository};
use dc_core::services::mail::MailServiceTrait;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, TokenPairResponse};
use crate::handlers::{handle_domain_error, validation_error_response};

/// Handler for POST /login
///
/// Checks the password and issues a new token pair. An unknown email and a
/// wrong password produce the same 404 response.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "status": 200,
///     "message": "User logged in",
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed email or password shorter than 6 characters
/// - 404 Not Found: Unknown email or wrong password
/// - 500 Internal Server Error: Storage or token signing failure
pub async fn login<U, T, M, E>(
    state: web::Data<AppState<U, T, M, E>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailServiceTrait + ?Sized + 'static,
    E: EventRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.auth_service.login(&request.email, &request.password).await {
        Ok(auth_response) => HttpResponse::Ok().json(TokenPairResponse {
            status: 200,
            message: "User logged in".to_string(),
            access_token: auth_response.access_token,
            refresh_token: auth_response.refresh_token,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
