//! Authentication service module
//!
//! This module provides the account flows built on top of the token service:
//! - Registration and login with bcrypt-hashed passwords
//! - Access token verification and user resolution for protected routes
//! - Refresh and logout

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::{hash_password, verify_password};
pub use service::AuthService;
