//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::domain::entities::token::{
    AccessClaims, IssuedRefreshToken, RefreshClaims, RefreshTokenRecord, TokenPair,
};
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;

/// Service for issuing, verifying, refreshing and revoking JWTs
///
/// Access tokens are stateless. Refresh tokens reference a
/// [`RefreshTokenRecord`] by `tokenId`; the record must exist and be unexpired
/// for the refresh token to be exchanged.
pub struct TokenService<R: TokenRepository> {
    pub(crate) repository: R,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Token repository for refresh-token records
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService` instance or an error if the secret is empty
    pub fn new(repository: R, config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.is_empty() {
            return Err(DomainError::internal("JWT secret must not be empty"));
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;

        Ok(Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Access token lifetime in seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.config.access_token_expiry_seconds
    }

    /// Issues a signed access token
    ///
    /// # Arguments
    ///
    /// * `email` - Account email embedded in the token
    /// * `username` - Display name embedded in the token
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Compact JWT valid for the configured access lifetime
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed
    pub fn issue_access_token(&self, email: &str, username: &str) -> Result<String, DomainError> {
        let claims = AccessClaims::new(email, username, self.config.access_ttl());
        self.encode_jwt(&claims)
    }

    /// Issues a refresh token and persists its record
    ///
    /// A fresh random `tokenId` is generated for every call, so two refresh
    /// tokens never share a record.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedRefreshToken)` - The signed token and its record identifier
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing or persisting failed
    pub async fn issue_refresh_token(
        &self,
        email: &str,
        username: &str,
    ) -> Result<IssuedRefreshToken, DomainError> {
        let record = RefreshTokenRecord::new(self.config.refresh_ttl());
        let claims = RefreshClaims::new(email, username, record.token_id, self.config.refresh_ttl());
        let token = self.encode_jwt(&claims)?;

        let record = self
            .repository
            .save_refresh_token(record)
            .await
            .map_err(|e| {
                error!("Failed to persist refresh token record: {}", e);
                DomainError::Token(TokenError::TokenGenerationFailed)
            })?;

        debug!(token_id = %record.token_id, "Issued refresh token");

        Ok(IssuedRefreshToken {
            token,
            token_id: record.token_id,
        })
    }

    /// Issues an access token and a refresh token for the same account
    pub async fn issue_token_pair(
        &self,
        email: &str,
        username: &str,
    ) -> Result<TokenPair, DomainError> {
        let access_token = self.issue_access_token(email, username)?;
        let refresh_token = self.issue_refresh_token(email, username).await?;
        Ok(TokenPair::new(access_token, refresh_token.token))
    }

    /// Verifies an access token and returns its claims
    ///
    /// # Arguments
    ///
    /// * `token` - The JWT access token to verify
    ///
    /// # Returns
    ///
    /// * `Ok(AccessClaims)` - The decoded claims if valid
    /// * `Err(TokenError::TokenExpired)` - The token's expiry has passed
    /// * `Err(TokenError::InvalidSignature)` - Signed with a different secret
    /// * `Err(TokenError::InvalidTokenFormat)` - Malformed, or not an access token
    pub fn verify_access_token(&self, token: &str) -> Result<AccessClaims, DomainError> {
        decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired.into(),
                ErrorKind::InvalidSignature => TokenError::InvalidSignature.into(),
                _ => TokenError::InvalidTokenFormat.into(),
            })
    }

    /// Exchanges a refresh token for a new access token
    ///
    /// The refresh token and its record are left untouched, so the same
    /// refresh token can be exchanged again until it expires or is revoked.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - New access token for the refresh token's account
    /// * `Err(TokenError::InvalidRefreshToken)` - Bad signature or shape
    /// * `Err(TokenError::RefreshTokenExpired)` - Claim or stored record expired
    /// * `Err(TokenError::TokenRevoked)` - Record no longer exists
    /// * `Err(DomainError::Internal)` - Store failure
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, DomainError> {
        let claims: RefreshClaims = self
            .decode_refresh(refresh_token, &self.validation)
            .map_err(|kind| match kind {
                ErrorKind::ExpiredSignature => TokenError::RefreshTokenExpired,
                _ => TokenError::InvalidRefreshToken,
            })?;

        let record = self
            .repository
            .find_by_token_id(claims.token_id)
            .await?
            .ok_or_else(|| {
                debug!(token_id = %claims.token_id, "Refresh token record not found");
                DomainError::Token(TokenError::TokenRevoked)
            })?;

        if record.is_expired() {
            debug!(token_id = %record.token_id, "Refresh token record expired");
            return Err(TokenError::RefreshTokenExpired.into());
        }

        self.issue_access_token(&claims.email, &claims.username)
    }

    /// Revokes a refresh token by deleting its record
    ///
    /// The signature must be valid but the claim's own expiry is not
    /// enforced, so a stale refresh token can still be logged out.
    /// Already-issued access tokens stay valid until they expire.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The record was deleted
    /// * `Ok(false)` - No record existed (already revoked or purged)
    /// * `Err(TokenError::InvalidRefreshToken)` - Bad signature or shape
    /// * `Err(DomainError::Internal)` - Store failure
    pub async fn revoke_refresh_token(&self, refresh_token: &str) -> Result<bool, DomainError> {
        let mut validation = self.validation.clone();
        validation.validate_exp = false;

        let claims: RefreshClaims = self
            .decode_refresh(refresh_token, &validation)
            .map_err(|_| TokenError::InvalidRefreshToken)?;

        let deleted = self.repository.delete_by_token_id(claims.token_id).await?;
        info!(token_id = %claims.token_id, deleted, "Refresh token revoked");
        Ok(deleted)
    }

    /// Encodes claims into an HS256 JWT
    pub(crate) fn encode_jwt<T: Serialize>(&self, claims: &T) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            error!("Failed to sign token: {}", e);
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    fn decode_refresh<T: DeserializeOwned>(
        &self,
        token: &str,
        validation: &Validation,
    ) -> Result<T, ErrorKind> {
        decode::<T>(token, &self.decoding_key, validation)
            .map(|data| data.claims)
            .map_err(|e| e.into_kind())
    }
}
