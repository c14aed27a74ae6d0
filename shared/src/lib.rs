//! Shared utilities and common types for the DevCal server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and loading
//! - Error body and response structures
//! - Validation helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use crate::config::{
    AppConfig, AuthConfig, CleanupConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, LogFormat, LoggingConfig, MailConfig, MailProvider, PasswordConfig, ServerConfig,
};
pub use crate::errors::{error_codes, ErrorBody};
pub use crate::types::{HealthResponse, StatusResponse};
pub use crate::utils::validation;
