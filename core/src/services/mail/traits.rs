//! Trait for mail service integration

use async_trait::async_trait;

/// Trait for mail service integration
///
/// Failures are reported as plain strings; callers treat delivery as best
/// effort and never fail a request because a notice could not be sent.
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Send the welcome notice after a successful registration
    async fn send_registration_mail(&self, email: &str, username: &str) -> Result<(), String>;

    /// Send the notice after a successful login
    async fn send_login_mail(&self, email: &str, username: &str) -> Result<(), String>;
}
