//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, TokenError, ValidationError};

#[test]
fn test_token_error_converts_into_domain_error() {
    let error: DomainError = TokenError::TokenExpired.into();
    assert!(matches!(error, DomainError::Token(TokenError::TokenExpired)));
    assert_eq!(error.to_string(), "Token expired");
}

#[test]
fn test_auth_error_is_transparent() {
    let error: DomainError = AuthError::UserAlreadyExists.into();
    assert_eq!(error.to_string(), "User already exists");
}

#[test]
fn test_validation_error_messages_name_the_field() {
    let error = ValidationError::InvalidLength {
        field: "username".to_string(),
        min: 3,
        max: 100,
        actual: 2,
    };
    let message = error.to_string();
    assert!(message.contains("username"));
    assert!(message.contains("actual: 2"));
}

#[test]
fn test_is_internal() {
    assert!(DomainError::internal("pool closed").is_internal());
    assert!(DomainError::from(TokenError::TokenGenerationFailed).is_internal());
    assert!(!DomainError::from(TokenError::TokenRevoked).is_internal());
    assert!(!DomainError::from(AuthError::UserNotFound).is_internal());
}
