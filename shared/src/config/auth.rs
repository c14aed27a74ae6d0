//! Authentication configuration

use serde::{Deserialize, Serialize};

const DEFAULT_JWT_SECRET: &str = "devcal-development-secret-change-in-production";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Shared HS256 secret used for both access and refresh tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            access_token_expiry: 900,       // 15 minutes
            refresh_token_expiry: 432_000,  // 5 days
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PasswordConfig {
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self { bcrypt_cost: 10 }
    }
}

/// Background purge of expired refresh-token records
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CleanupConfig {
    /// Run the purge task at all
    pub enabled: bool,

    /// Seconds between purge runs
    pub interval_seconds: u64,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_seconds: 3600,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    pub password: PasswordConfig,

    /// Expired refresh-token purge
    pub cleanup: CleanupConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry, 900);
        assert_eq!(config.refresh_token_expiry, 432_000);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_with_secret() {
        let config = JwtConfig::new("my-secret");

        assert_eq!(config.secret, "my-secret");
        assert_eq!(config.access_token_expiry, 900);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_cleanup_disabled_by_default() {
        let config = AuthConfig::default();
        assert!(!config.cleanup.enabled);
        assert_eq!(config.cleanup.interval_seconds, 3600);
        assert_eq!(config.password.bcrypt_cost, 10);
    }
}
