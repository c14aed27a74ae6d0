//! Authentication response value object for API responses.

use crate::domain::entities::{TokenPair, User};

/// Result of a successful registration or login
///
/// Carries the issued token pair together with the account it belongs to so
/// that handlers and notifications do not need a second lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// The authenticated account
    pub user: User,
}

impl AuthResponse {
    /// Creates an authentication response from a token pair and the account
    pub fn from_token_pair(token_pair: TokenPair, user: User) -> Self {
        Self {
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            user,
        }
    }
}
