//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations. Identifiers are stored as
//! hyphenated `CHAR(36)` strings.

pub mod event_repository_impl;
pub mod token_repository_impl;
pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use event_repository_impl::MySqlEventRepository;
pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;

use dc_core::errors::DomainError;
use uuid::Uuid;

/// Wrap a driver error with the operation that failed
pub(crate) fn db_error(context: &str, error: sqlx::Error) -> DomainError {
    tracing::error!("{}: {}", context, error);
    DomainError::Internal {
        message: format!("{}: {}", context, error),
    }
}

/// Parse a stored identifier column
pub(crate) fn parse_uuid(column: &str, value: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|e| DomainError::Internal {
        message: format!("Invalid UUID in {}: {}", column, e),
    })
}

/// Whether a driver error is a unique-key violation
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}
