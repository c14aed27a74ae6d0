//! Authentication route handlers
//!
//! This module contains the account and session endpoints:
//! - Registration and login
//! - Access token verification
//! - Token refresh
//! - Logout

pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;
pub mod verify;

use actix_web::HttpRequest;

use dc_core::errors::{DomainError, TokenError};

use crate::middleware::REFRESH_TOKEN_HEADER;

/// Read the refresh token from the `refreshtoken` header
pub(crate) fn refresh_token_header(req: &HttpRequest) -> Result<String, DomainError> {
    req.headers()
        .get(REFRESH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(DomainError::Token(TokenError::MissingToken))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_refresh_token_header() {
        let req = TestRequest::default()
            .insert_header((REFRESH_TOKEN_HEADER, "abc.def.ghi"))
            .to_http_request();
        assert_eq!(refresh_token_header(&req).unwrap(), "abc.def.ghi");

        let req = TestRequest::default()
            .insert_header((REFRESH_TOKEN_HEADER, "  "))
            .to_http_request();
        assert!(matches!(
            refresh_token_header(&req),
            Err(DomainError::Token(TokenError::MissingToken))
        ));

        let req = TestRequest::default().to_http_request();
        assert!(refresh_token_header(&req).is_err());
    }
}
