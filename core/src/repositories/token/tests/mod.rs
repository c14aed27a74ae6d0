//! Tests for the in-memory token repository

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;
use crate::repositories::token::{MockTokenRepository, TokenRepository};

#[tokio::test]
async fn test_save_and_find_record() {
    let repo = MockTokenRepository::new();
    let record = RefreshTokenRecord::new(Duration::days(5));

    let saved = repo.save_refresh_token(record.clone()).await.unwrap();
    assert_eq!(saved, record);

    let found = repo.find_by_token_id(record.token_id).await.unwrap();
    assert_eq!(found, Some(record));
}

#[tokio::test]
async fn test_duplicate_token_id_is_rejected() {
    let repo = MockTokenRepository::new();
    let record = RefreshTokenRecord::new(Duration::days(5));

    repo.save_refresh_token(record.clone()).await.unwrap();
    let result = repo.save_refresh_token(record).await;

    assert!(matches!(result, Err(DomainError::Internal { .. })));
}

#[tokio::test]
async fn test_delete_reports_whether_record_existed() {
    let repo = MockTokenRepository::new();
    let record = RefreshTokenRecord::new(Duration::days(5));
    repo.save_refresh_token(record.clone()).await.unwrap();

    assert!(repo.delete_by_token_id(record.token_id).await.unwrap());
    assert!(!repo.delete_by_token_id(record.token_id).await.unwrap());
    assert!(!repo.delete_by_token_id(Uuid::new_v4()).await.unwrap());
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_delete_expired_tokens_keeps_active_records() {
    let repo = MockTokenRepository::new();
    let active = RefreshTokenRecord::new(Duration::days(5));
    let stale = RefreshTokenRecord::new(Duration::days(5));
    repo.save_refresh_token(active.clone()).await.unwrap();
    repo.save_refresh_token(stale.clone()).await.unwrap();
    repo.set_expiry(stale.token_id, Utc::now() - Duration::minutes(1)).await;

    let deleted = repo.delete_expired_tokens().await.unwrap();

    assert_eq!(deleted, 1);
    assert!(repo.is_token_active(active.token_id).await.unwrap());
    assert!(repo.find_by_token_id(stale.token_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unavailable_store_returns_internal_error() {
    let repo = MockTokenRepository::new();
    repo.set_unavailable(true);

    let result = repo.find_by_token_id(Uuid::new_v4()).await;
    assert!(matches!(result, Err(DomainError::Internal { .. })));
}
