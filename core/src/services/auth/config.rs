//! Configuration for the authentication service

use dc_shared::config::{MailConfig, PasswordConfig};

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// Send a welcome notice after registration
    pub notify_on_register: bool,
    /// Send a notice after each login
    pub notify_on_login: bool,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
            notify_on_register: true,
            notify_on_login: true,
        }
    }
}

impl AuthServiceConfig {
    /// Build from the password and mail sections of the application config
    pub fn from_settings(password: &PasswordConfig, mail: &MailConfig) -> Self {
        Self {
            bcrypt_cost: password.bcrypt_cost,
            notify_on_register: mail.notify_on_register,
            notify_on_login: mail.notify_on_login,
        }
    }
}
