//! Password hashing helpers
//!
//! bcrypt is CPU-bound, so both operations run on the blocking thread pool.

use crate::errors::DomainError;

/// Hash a password with the given bcrypt cost
pub async fn hash_password(password: &str, cost: u32) -> Result<String, DomainError> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
}

/// Check a password against a stored bcrypt hash
///
/// A malformed stored hash is an internal error, not a mismatch.
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, DomainError> {
    let password = password.to_string();
    let password_hash = password_hash.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|e| DomainError::internal(format!("Password verification task failed: {}", e)))?
        .map_err(|e| DomainError::internal(format!("Failed to verify password: {}", e)))
}
