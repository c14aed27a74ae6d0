//! Mail notification configuration

use serde::{Deserialize, Serialize};

/// Mail delivery backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Write notifications to the log only
    #[default]
    Log,
    /// POST notifications to an HTTP mail relay
    Http,
}

/// Mail notification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MailConfig {
    /// Delivery backend
    pub provider: MailProvider,

    /// Relay endpoint for the `http` provider
    pub relay_url: Option<String>,

    /// Bearer token sent to the relay
    pub relay_api_key: Option<String>,

    /// Sender address
    pub from_address: String,

    /// Relay request timeout in seconds
    pub timeout_seconds: u64,

    /// Send a mail after each successful login
    pub notify_on_login: bool,

    /// Send a welcome mail after registration
    pub notify_on_register: bool,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::default(),
            relay_url: None,
            relay_api_key: None,
            from_address: String::from("no-reply@devcal.local"),
            timeout_seconds: 10,
            notify_on_login: true,
            notify_on_register: true,
        }
    }
}
