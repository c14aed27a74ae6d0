//! User entity representing a registered DevCal account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dc_shared::utils::validation::{normalize_email, validators};

use crate::errors::ValidationError;

/// Minimum username length in characters
pub const USERNAME_MIN_LENGTH: usize = 3;

/// Maximum username length in characters
pub const USERNAME_MAX_LENGTH: usize = 100;

/// Minimum password length in characters
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Upper bound kept below bcrypt's 72-byte input limit
pub const PASSWORD_MAX_LENGTH: usize = 72;

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login email, stored normalized and unique across accounts
    pub email: String,

    /// Display name
    pub username: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with an already hashed password
    pub fn new(email: &str, username: &str, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: normalize_email(email),
            username: username.trim().to_string(),
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Check registration input before anything is hashed or stored
pub fn validate_registration(
    email: &str,
    username: &str,
    password: &str,
) -> Result<(), ValidationError> {
    validate_email(email)?;

    let username = username.trim();
    if !validators::not_empty(username) {
        return Err(ValidationError::RequiredField {
            field: "username".to_string(),
        });
    }
    if !validators::length_between(username, USERNAME_MIN_LENGTH, USERNAME_MAX_LENGTH) {
        return Err(ValidationError::InvalidLength {
            field: "username".to_string(),
            min: USERNAME_MIN_LENGTH,
            max: USERNAME_MAX_LENGTH,
            actual: username.chars().count(),
        });
    }

    if !validators::length_between(password, PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH) {
        return Err(ValidationError::InvalidLength {
            field: "password".to_string(),
            min: PASSWORD_MIN_LENGTH,
            max: PASSWORD_MAX_LENGTH,
            actual: password.chars().count(),
        });
    }

    Ok(())
}

/// Check that an email is present and well formed
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "email".to_string(),
        });
    }
    if !validators::is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
