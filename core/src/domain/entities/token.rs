//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (5 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 5;

/// Claims carried by an access token
///
/// Unknown fields are rejected so that a refresh token, which carries an
/// extra `tokenId`, can never pass the access-token gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessClaims {
    /// Account email
    pub email: String,

    /// Display name
    pub username: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl AccessClaims {
    /// Creates claims for an access token valid for `ttl` from now
    pub fn new(email: &str, username: &str, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            email: email.to_string(),
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Claims carried by a refresh token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Account email
    pub email: String,

    /// Display name
    pub username: String,

    /// Reference to the server-side [`RefreshTokenRecord`]
    #[serde(rename = "tokenId")]
    pub token_id: Uuid,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl RefreshClaims {
    /// Creates claims for a refresh token bound to `token_id`
    pub fn new(email: &str, username: &str, token_id: Uuid, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            email: email.to_string(),
            username: username.to_string(),
            token_id,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

/// Server-side record of an issued refresh token.
///
/// Only the identifier is stored, never the signed token itself. A refresh
/// token is usable while its record exists and `expires_at` is in the future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    /// Identifier embedded in the refresh token as `tokenId`
    pub token_id: Uuid,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    /// Creates a record with a fresh random identifier
    ///
    /// # Arguments
    ///
    /// * `ttl` - How long the refresh token stays usable
    pub fn new(ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            token_id: Uuid::new_v4(),
            expires_at: now + ttl,
            created_at: now,
        }
    }

    /// Checks if the record has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// A freshly minted refresh token and the identifier it references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedRefreshToken {
    pub token: String,
    pub token_id: Uuid,
}

/// Token pair returned to the client after registration or login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_claims() {
        let claims = AccessClaims::new(
            "a@x.com",
            "a",
            Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
        );

        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.username, "a");
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_EXPIRY_MINUTES * 60);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_access_claims_expiration() {
        let mut claims = AccessClaims::new("a@x.com", "a", Duration::minutes(15));
        claims.exp = Utc::now().timestamp() - 1;
        assert!(claims.is_expired());
    }

    #[test]
    fn test_refresh_claims_wire_shape() {
        let token_id = Uuid::new_v4();
        let claims = RefreshClaims::new("a@x.com", "a", token_id, Duration::days(5));
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["tokenId"], token_id.to_string());
        assert_eq!(json["email"], "a@x.com");
        assert!(json.get("token_id").is_none());
    }

    #[test]
    fn test_access_claims_reject_refresh_payload() {
        let claims = RefreshClaims::new("a@x.com", "a", Uuid::new_v4(), Duration::days(5));
        let json = serde_json::to_string(&claims).unwrap();

        assert!(serde_json::from_str::<AccessClaims>(&json).is_err());
    }

    #[test]
    fn test_refresh_token_record_creation() {
        let record = RefreshTokenRecord::new(Duration::days(REFRESH_TOKEN_EXPIRY_DAYS));

        assert!(!record.is_expired());
        assert!(record.expires_at > record.created_at);

        let ttl = record.expires_at - record.created_at;
        assert_eq!(ttl, Duration::days(REFRESH_TOKEN_EXPIRY_DAYS));
    }

    #[test]
    fn test_refresh_token_record_expiration() {
        let mut record = RefreshTokenRecord::new(Duration::days(5));
        record.expires_at = Utc::now() - Duration::seconds(1);

        assert!(record.is_expired());
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let first = RefreshTokenRecord::new(Duration::days(5));
        let second = RefreshTokenRecord::new(Duration::days(5));
        assert_ne!(first.token_id, second.token_id);
    }
}
