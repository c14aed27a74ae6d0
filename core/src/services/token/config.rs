//! Configuration for the token service

use chrono::Duration;
use dc_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret shared by access and refresh tokens
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    pub access_token_expiry_seconds: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_expiry_seconds: i64,
}

impl TokenServiceConfig {
    /// Access token lifetime
    pub fn access_ttl(&self) -> Duration {
        Duration::seconds(self.access_token_expiry_seconds)
    }

    /// Refresh token lifetime, used for both the claim and the stored record
    pub fn refresh_ttl(&self) -> Duration {
        Duration::seconds(self.refresh_token_expiry_seconds)
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            access_token_expiry_seconds: jwt.access_token_expiry,
            refresh_token_expiry_seconds: jwt.refresh_token_expiry,
        }
    }
}
