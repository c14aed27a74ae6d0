//! Tests for the in-memory user repository

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};
use crate::repositories::user::{MockUserRepository, UserRepository};

#[tokio::test]
async fn test_create_and_find_user() {
    let repo = MockUserRepository::new();
    let user = User::new("dev@example.com", "dev", "hash".to_string());

    repo.create(user.clone()).await.unwrap();

    assert_eq!(repo.find_by_email("dev@example.com").await.unwrap(), Some(user.clone()));
    assert_eq!(repo.find_by_id(user.id).await.unwrap(), Some(user));
    assert!(repo.exists_by_email("dev@example.com").await.unwrap());
    assert!(!repo.exists_by_email("other@example.com").await.unwrap());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let repo = MockUserRepository::new();
    repo.create(User::new("dev@example.com", "dev", "hash".to_string()))
        .await
        .unwrap();

    let result = repo
        .create(User::new("DEV@example.com", "dev2", "hash".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
}

#[tokio::test]
async fn test_remove_user() {
    let repo = MockUserRepository::new();
    let user = repo
        .create(User::new("dev@example.com", "dev", "hash".to_string()))
        .await
        .unwrap();

    assert!(repo.remove(user.id).await);
    assert!(repo.find_by_id(user.id).await.unwrap().is_none());
}
