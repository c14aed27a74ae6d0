//! Mail Service Module
//!
//! Implementations of [`MailServiceTrait`] for registration and login notices.
//!
//! - **Log**: writes a structured log line instead of delivering mail
//! - **HTTP relay**: POSTs a JSON message to a mail relay with `reqwest`

use std::sync::Arc;

use dc_core::services::mail::MailServiceTrait;
use dc_shared::config::{MailConfig, MailProvider};

pub mod http_mail;
pub mod log_mail;

pub use http_mail::{HttpMailService, MailMessage};
pub use log_mail::LogMailService;

#[cfg(test)]
mod tests;

/// Subject line for the welcome notice
pub const REGISTRATION_SUBJECT: &str = "Welcome to DevCal";

/// Subject line for the sign-in notice
pub const LOGIN_SUBJECT: &str = "New sign-in to your DevCal account";

/// Create a mail service based on configuration
///
/// Falls back to the log service when the HTTP relay cannot be built, so a
/// misconfigured relay never prevents the server from starting.
pub fn create_mail_service(config: &MailConfig) -> Arc<dyn MailServiceTrait> {
    match config.provider {
        MailProvider::Log => Arc::new(LogMailService::new(&config.from_address)),
        MailProvider::Http => match HttpMailService::new(config) {
            Ok(service) => Arc::new(service),
            Err(e) => {
                tracing::error!("Failed to initialize HTTP mail service: {}", e);
                tracing::warn!("Falling back to log mail service");
                Arc::new(LogMailService::new(&config.from_address))
            }
        },
    }
}

/// Mask the local part of an email for logging
///
/// `developer@example.com` becomes `d***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
