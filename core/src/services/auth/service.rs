//! Main authentication service implementation

use std::sync::Arc;
use tracing::{debug, info, warn};

use dc_shared::utils::validation::normalize_email;

use crate::domain::entities::token::AccessClaims;
use crate::domain::entities::user::{validate_email, validate_registration, User};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::mail::MailServiceTrait;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};

/// Authentication service for the account and session flows
pub struct AuthService<U, T, M>
where
    U: UserRepository,
    T: TokenRepository,
    M: MailServiceTrait + ?Sized,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService<T>>,
    /// Login and registration notices
    mail_service: Arc<M>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, T, M> AuthService<U, T, M>
where
    U: UserRepository,
    T: TokenRepository,
    M: MailServiceTrait + ?Sized,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT token management
    /// * `mail_service` - Notification delivery
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService<T>>,
        mail_service: Arc<M>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            mail_service,
            config,
        }
    }

    /// Register a new account and sign it in
    ///
    /// This method:
    /// 1. Validates email, username (3-100 chars) and password (6+ chars)
    /// 2. Rejects an email that is already registered
    /// 3. Issues an access/refresh token pair
    /// 4. Stores the user with a bcrypt hash of the password
    /// 5. Sends a welcome notice (failures are logged only)
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Tokens and the created account
    /// * `Err(DomainError::ValidationErr)` - Input failed validation
    /// * `Err(DomainError::Auth(AuthError::UserAlreadyExists))` - Email taken
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        validate_registration(email, username, password)?;
        let email = normalize_email(email);

        if self.user_repository.exists_by_email(&email).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = hash_password(password, self.config.bcrypt_cost).await?;
        let user = User::new(&email, username, password_hash);

        // Tokens first: a failed issue must not leave an account behind
        let token_pair = self
            .token_service
            .issue_token_pair(&user.email, &user.username)
            .await?;

        let user = self.user_repository.create(user).await?;

        info!(user_id = %user.id, "User registered");

        if self.config.notify_on_register {
            if let Err(e) = self
                .mail_service
                .send_registration_mail(&user.email, &user.username)
                .await
            {
                warn!(user_id = %user.id, "Failed to send registration mail: {}", e);
            }
        }

        Ok(AuthResponse::from_token_pair(token_pair, user))
    }

    /// Sign in with email and password
    ///
    /// An unknown email and a wrong password produce different domain errors
    /// but are reported identically to clients.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Tokens and the account
    /// * `Err(DomainError::Auth(AuthError::UserNotFound))` - No such account
    /// * `Err(DomainError::Auth(AuthError::InvalidCredentials))` - Wrong password
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        validate_email(email)?;
        let email = normalize_email(email);

        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(password, &user.password_hash).await? {
            debug!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token_pair = self
            .token_service
            .issue_token_pair(&user.email, &user.username)
            .await?;

        info!(user_id = %user.id, "User logged in");

        if self.config.notify_on_login {
            if let Err(e) = self
                .mail_service
                .send_login_mail(&user.email, &user.username)
                .await
            {
                warn!(user_id = %user.id, "Failed to send login mail: {}", e);
            }
        }

        Ok(AuthResponse::from_token_pair(token_pair, user))
    }

    /// Verify an access token without touching the user store
    pub fn verify_access_token(&self, access_token: &str) -> DomainResult<AccessClaims> {
        self.token_service.verify_access_token(access_token)
    }

    /// Resolve the account behind an access token
    ///
    /// Used by the request gate on protected routes.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The token is valid and the account still exists
    /// * `Err(DomainError::Token(_))` - Missing, malformed or expired token
    /// * `Err(DomainError::Auth(AuthError::UserNotFound))` - Account was removed
    /// * `Err(DomainError::Internal)` - Store failure
    pub async fn authenticate(&self, access_token: &str) -> DomainResult<User> {
        if access_token.is_empty() {
            return Err(TokenError::MissingToken.into());
        }

        let claims = self.token_service.verify_access_token(access_token)?;

        self.user_repository
            .find_by_email(&claims.email)
            .await?
            .ok_or_else(|| DomainError::Auth(AuthError::UserNotFound))
    }

    /// Exchange a refresh token for a new access token
    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<String> {
        if refresh_token.is_empty() {
            return Err(TokenError::MissingToken.into());
        }
        self.token_service.refresh_access_token(refresh_token).await
    }

    /// Log out by revoking a refresh token
    ///
    /// Succeeds even when the refresh token was already revoked.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - A refresh-token record was deleted
    /// * `Ok(false)` - Nothing to delete
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<bool> {
        if refresh_token.is_empty() {
            return Err(TokenError::MissingToken.into());
        }
        self.token_service.revoke_refresh_token(refresh_token).await
    }
}
