//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - Access token issuance and verification
//! - Refresh token issuance, exchange and revocation
//! - Background purge of expired refresh-token records

mod cleanup;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use cleanup::{PurgeReport, TokenCleanupConfig, TokenCleanupService};
pub use config::TokenServiceConfig;
pub use service::TokenService;
