use actix_web::{web, HttpResponse};
use validator::Validate;

use dc_core::repositories::{EventRepository, TokenRepository, UserRepository};
use dc_core::services::mail::MailServiceTrait;

use crate::app::AppState;
use crate::dto::auth::{RegisterRequest, TokenPairResponse};
use crate::handlers::{handle_domain_error, validation_error_response};

/// Handler for POST /register
///
/// Creates an account and signs it in.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "dev@example.com",
///     "username": "devuser",
///     "password": "secret1"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "status": 201,
///     "message": "User Created",
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid input or email already registered
/// - 500 Internal Server Error: Storage or token signing failure
pub async fn register<U, T, M, E>(
    state: web::Data<AppState<U, T, M, E>>,
    request: web::Json<RegisterRequest>,
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

    match state
        .auth_service
        .register(&request.email, &request.username, &request.password)
        .await
    {
        Ok(auth_response) => HttpResponse::Created().json(TokenPairResponse {
            status: 201,
            message: "User Created".to_string(),
            access_token: auth_response.access_token,
            refresh_token: auth_response.refresh_token,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
