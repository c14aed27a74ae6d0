//! Translation of domain errors into HTTP responses
//!
//! Every failure leaves the API as `{status, error, message}` with the
//! status code repeated in the body.

use std::fmt;

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use validator::ValidationErrors;

use dc_core::errors::{AuthError, DomainError, TokenError};
use dc_shared::errors::{error_codes, ErrorBody};

/// Status, code and client-facing message for a domain error
pub fn error_parts(error: &DomainError) -> (StatusCode, &'static str, String) {
    match error {
        DomainError::Token(token_error) => match token_error {
            TokenError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                error_codes::MISSING_TOKEN,
                "Missing authentication token".to_string(),
            ),
            TokenError::InvalidTokenFormat
            | TokenError::InvalidSignature
            | TokenError::InvalidRefreshToken => (
                StatusCode::UNAUTHORIZED,
                error_codes::TOKEN_INVALID,
                "Token invalid".to_string(),
            ),
            TokenError::TokenExpired | TokenError::RefreshTokenExpired => (
                StatusCode::UNAUTHORIZED,
                error_codes::TOKEN_EXPIRED,
                "Token expired".to_string(),
            ),
            TokenError::TokenRevoked => (
                StatusCode::NOT_FOUND,
                error_codes::TOKEN_REVOKED,
                "Refresh token not found or revoked".to_string(),
            ),
            TokenError::TokenGenerationFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::TOKEN_GENERATION_FAILED,
                "Failed to generate token".to_string(),
            ),
        },
        // Unknown email and wrong password share one response
        DomainError::Auth(AuthError::UserNotFound | AuthError::InvalidCredentials) => (
            StatusCode::NOT_FOUND,
            error_codes::USER_NOT_FOUND,
            "User not found".to_string(),
        ),
        DomainError::Auth(AuthError::UserAlreadyExists) => (
            StatusCode::BAD_REQUEST,
            error_codes::USER_ALREADY_EXISTS,
            "User already exists".to_string(),
        ),
        DomainError::ValidationErr(validation) => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            validation.to_string(),
        ),
        DomainError::Validation { message } => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            message.clone(),
        ),
        DomainError::NotFound { resource } => (
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            format!("{} not found.", resource),
        ),
        DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            "Internal server error".to_string(),
        ),
    }
}

/// Build the error response for a domain error
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code, message) = error_parts(error);

    if status.is_server_error() {
        tracing::error!("Request failed: {}", error);
    } else {
        tracing::debug!(code, "Request rejected: {}", error);
    }

    error_response(status, code, message)
}

/// Build a `{status, error, message}` response
pub fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody::new(status.as_u16(), code, message))
}

/// 400 response for DTO validation failures
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();

    error_response(
        StatusCode::BAD_REQUEST,
        error_codes::VALIDATION_ERROR,
        format!("Invalid value for: {}", fields.join(", ")),
    )
}

/// JSON extractor error handler: malformed bodies become a 400 error body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid request body: {}", err);
    let response = error_response(StatusCode::BAD_REQUEST, error_codes::BAD_REQUEST, message);
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Domain error usable as an actix error, for extractors and middleware
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        Self(DomainError::Token(error))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        error_parts(&self.0).0
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&self.0)
    }
}
