//! Unit tests for token service

use chrono::{Duration, Utc};
use uuid::Uuid;

use dc_shared::config::JwtConfig;

use crate::domain::entities::token::{AccessClaims, RefreshClaims};
use crate::errors::{DomainError, TokenError};
use crate::repositories::{MockTokenRepository, TokenRepository};
use crate::services::token::{TokenService, TokenServiceConfig};

const EMAIL: &str = "a@x.com";
const USERNAME: &str = "a";

fn create_test_service() -> (TokenService<MockTokenRepository>, MockTokenRepository) {
    let repository = MockTokenRepository::new();
    let config = TokenServiceConfig {
        jwt_secret: "test-secret-key".to_string(),
        ..TokenServiceConfig::default()
    };
    let service = TokenService::new(repository.clone(), config).unwrap();
    (service, repository)
}

fn expect_token_error(result: Result<impl std::fmt::Debug, DomainError>, expected: TokenError) {
    match result {
        Err(DomainError::Token(actual)) => assert_eq!(actual, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

#[test]
fn test_new_rejects_empty_secret() {
    let config = TokenServiceConfig {
        jwt_secret: String::new(),
        ..TokenServiceConfig::default()
    };
    assert!(TokenService::new(MockTokenRepository::new(), config).is_err());
}

#[test]
fn test_default_config_matches_jwt_defaults() {
    let config = TokenServiceConfig::default();
    let jwt = JwtConfig::default();

    assert_eq!(config.jwt_secret, jwt.secret);
    assert_eq!(config.access_token_expiry_seconds, 900);
    assert_eq!(config.refresh_token_expiry_seconds, 432_000);
}

#[test]
fn test_issue_and_verify_access_token() {
    let (service, _) = create_test_service();

    let token = service.issue_access_token(EMAIL, USERNAME).unwrap();
    let claims = service.verify_access_token(&token).unwrap();

    assert_eq!(claims.email, EMAIL);
    assert_eq!(claims.username, USERNAME);
    assert_eq!(claims.exp - claims.iat, 15 * 60);
}

#[test]
fn test_expired_access_token_is_rejected() {
    let (service, _) = create_test_service();
    let mut claims = AccessClaims::new(EMAIL, USERNAME, Duration::minutes(15));
    claims.iat = Utc::now().timestamp() - 20 * 60;
    claims.exp = Utc::now().timestamp() - 5 * 60;
    let token = service.encode_jwt(&claims).unwrap();

    expect_token_error(service.verify_access_token(&token), TokenError::TokenExpired);
}

#[test]
fn test_access_token_signed_with_other_secret_is_rejected() {
    let (service, _) = create_test_service();
    let other = TokenService::new(
        MockTokenRepository::new(),
        TokenServiceConfig {
            jwt_secret: "another-secret".to_string(),
            ..TokenServiceConfig::default()
        },
    )
    .unwrap();
    let token = other.issue_access_token(EMAIL, USERNAME).unwrap();

    expect_token_error(service.verify_access_token(&token), TokenError::InvalidSignature);
}

#[test]
fn test_malformed_access_token_is_rejected() {
    let (service, _) = create_test_service();

    expect_token_error(
        service.verify_access_token("not.a.jwt"),
        TokenError::InvalidTokenFormat,
    );
    expect_token_error(service.verify_access_token(""), TokenError::InvalidTokenFormat);
}

#[tokio::test]
async fn test_refresh_token_is_not_accepted_as_access_token() {
    let (service, _) = create_test_service();
    let refresh = service.issue_refresh_token(EMAIL, USERNAME).await.unwrap();

    expect_token_error(
        service.verify_access_token(&refresh.token),
        TokenError::InvalidTokenFormat,
    );
}

#[tokio::test]
async fn test_issue_refresh_token_persists_record() {
    let (service, repository) = create_test_service();

    let issued = service.issue_refresh_token(EMAIL, USERNAME).await.unwrap();

    let record = repository
        .find_by_token_id(issued.token_id)
        .await
        .unwrap()
        .expect("record stored");
    let remaining = record.expires_at - Utc::now();
    assert!(remaining <= Duration::days(5));
    assert!(remaining > Duration::days(5) - Duration::minutes(1));
}

#[tokio::test]
async fn test_each_refresh_token_gets_its_own_record() {
    let (service, repository) = create_test_service();

    let first = service.issue_refresh_token(EMAIL, USERNAME).await.unwrap();
    let second = service.issue_refresh_token(EMAIL, USERNAME).await.unwrap();

    assert_ne!(first.token_id, second.token_id);
    assert_eq!(repository.len().await, 2);
}

#[tokio::test]
async fn test_issue_token_pair() {
    let (service, repository) = create_test_service();

    let pair = service.issue_token_pair(EMAIL, USERNAME).await.unwrap();

    assert!(service.verify_access_token(&pair.access_token).is_ok());
    assert_ne!(pair.access_token, pair.refresh_token);
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_refresh_returns_access_token_for_same_account() {
    let (service, _) = create_test_service();
    let issued = service.issue_refresh_token(EMAIL, USERNAME).await.unwrap();

    let access = service.refresh_access_token(&issued.token).await.unwrap();
    let claims = service.verify_access_token(&access).unwrap();

    assert_eq!(claims.email, EMAIL);
    assert_eq!(claims.username, USERNAME);
}

#[tokio::test]
async fn test_refresh_can_be_repeated_without_rotation() {
    let (service, repository) = create_test_service();
    let issued = service.issue_refresh_token(EMAIL, USERNAME).await.unwrap();

    assert!(service.refresh_access_token(&issued.token).await.is_ok());
    assert!(service.refresh_access_token(&issued.token).await.is_ok());
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_refresh_after_revocation_fails_with_revoked() {
    let (service, _) = create_test_service();
    let issued = service.issue_refresh_token(EMAIL, USERNAME).await.unwrap();

    assert!(service.revoke_refresh_token(&issued.token).await.unwrap());

    expect_token_error(
        service.refresh_access_token(&issued.token).await,
        TokenError::TokenRevoked,
    );
}

#[tokio::test]
async fn test_refresh_with_expired_record_fails() {
    let (service, repository) = create_test_service();
    let issued = service.issue_refresh_token(EMAIL, USERNAME).await.unwrap();
    repository
        .set_expiry(issued.token_id, Utc::now() - Duration::seconds(1))
        .await;

    expect_token_error(
        service.refresh_access_token(&issued.token).await,
        TokenError::RefreshTokenExpired,
    );
}

#[tokio::test]
async fn test_refresh_with_expired_claim_fails() {
    let (service, repository) = create_test_service();
    let issued = service.issue_refresh_token(EMAIL, USERNAME).await.unwrap();
    let mut claims = RefreshClaims::new(EMAIL, USERNAME, issued.token_id, Duration::days(5));
    claims.exp = Utc::now().timestamp() - 60;
    let stale = service.encode_jwt(&claims).unwrap();

    assert!(repository.is_token_active(issued.token_id).await.unwrap());
    expect_token_error(
        service.refresh_access_token(&stale).await,
        TokenError::RefreshTokenExpired,
    );
}

#[tokio::test]
async fn test_refresh_with_unknown_token_id_fails_with_revoked() {
    let (service, _) = create_test_service();
    let claims = RefreshClaims::new(EMAIL, USERNAME, Uuid::new_v4(), Duration::days(5));
    let forged_id = service.encode_jwt(&claims).unwrap();

    expect_token_error(
        service.refresh_access_token(&forged_id).await,
        TokenError::TokenRevoked,
    );
}

#[tokio::test]
async fn test_refresh_rejects_access_token_and_garbage() {
    let (service, _) = create_test_service();
    let access = service.issue_access_token(EMAIL, USERNAME).unwrap();

    expect_token_error(
        service.refresh_access_token(&access).await,
        TokenError::InvalidRefreshToken,
    );
    expect_token_error(
        service.refresh_access_token("garbage").await,
        TokenError::InvalidRefreshToken,
    );
}

#[tokio::test]
async fn test_refresh_surfaces_store_failure() {
    let (service, repository) = create_test_service();
    let issued = service.issue_refresh_token(EMAIL, USERNAME).await.unwrap();
    repository.set_unavailable(true);

    let result = service.refresh_access_token(&issued.token).await;

    assert!(matches!(result, Err(DomainError::Internal { .. })));
}

#[tokio::test]
async fn test_issue_refresh_token_store_failure() {
    let (service, repository) = create_test_service();
    repository.set_unavailable(true);

    expect_token_error(
        service.issue_refresh_token(EMAIL, USERNAME).await,
        TokenError::TokenGenerationFailed,
    );
}

#[tokio::test]
async fn test_revoke_missing_record_is_not_an_error() {
    let (service, _) = create_test_service();
    let issued = service.issue_refresh_token(EMAIL, USERNAME).await.unwrap();

    assert!(service.revoke_refresh_token(&issued.token).await.unwrap());
    assert!(!service.revoke_refresh_token(&issued.token).await.unwrap());
}

#[tokio::test]
async fn test_revoke_accepts_refresh_token_past_claim_expiry() {
    let (service, repository) = create_test_service();
    let issued = service.issue_refresh_token(EMAIL, USERNAME).await.unwrap();
    let mut claims = RefreshClaims::new(EMAIL, USERNAME, issued.token_id, Duration::days(5));
    claims.exp = Utc::now().timestamp() - 60;
    let stale = service.encode_jwt(&claims).unwrap();

    assert!(service.revoke_refresh_token(&stale).await.unwrap());
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_revoke_rejects_invalid_token() {
    let (service, _) = create_test_service();

    expect_token_error(
        service.revoke_refresh_token("garbage").await,
        TokenError::InvalidRefreshToken,
    );
}

#[tokio::test]
async fn test_access_token_survives_logout() {
    let (service, _) = create_test_service();
    let pair = service.issue_token_pair(EMAIL, USERNAME).await.unwrap();

    service.revoke_refresh_token(&pair.refresh_token).await.unwrap();

    assert!(service.verify_access_token(&pair.access_token).is_ok());
}

#[tokio::test]
async fn test_full_lifecycle() {
    let (service, repository) = create_test_service();

    let issued = service.issue_refresh_token(EMAIL, USERNAME).await.unwrap();
    let access = service.refresh_access_token(&issued.token).await.unwrap();
    let claims = service.verify_access_token(&access).unwrap();
    assert_eq!((claims.email.as_str(), claims.username.as_str()), (EMAIL, USERNAME));

    service.revoke_refresh_token(&issued.token).await.unwrap();
    assert!(repository.find_by_token_id(issued.token_id).await.unwrap().is_none());

    expect_token_error(
        service.refresh_access_token(&issued.token).await,
        TokenError::TokenRevoked,
    );
}
