//! HTTP mail relay client
//!
//! Sends each notice as a JSON `POST` to the configured relay. The relay is
//! responsible for templating and delivery.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

use dc_core::services::mail::MailServiceTrait;
use dc_shared::config::MailConfig;

use crate::InfrastructureError;

use super::{mask_email, LOGIN_SUBJECT, REGISTRATION_SUBJECT};

/// Body posted to the mail relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub username: String,
}

/// Mail service backed by an HTTP relay
#[derive(Clone)]
pub struct HttpMailService {
    client: Client,
    relay_url: String,
    api_key: Option<String>,
    from_address: String,
}

impl HttpMailService {
    /// Build the relay client
    ///
    /// # Returns
    /// * `Err(InfrastructureError::Config)` - No relay URL configured
    /// * `Err(InfrastructureError::Http)` - The HTTP client could not be built
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let relay_url = config
            .relay_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| InfrastructureError::Config("mail.relay_url is not set".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            relay_url,
            api_key: config.relay_api_key.clone(),
            from_address: config.from_address.clone(),
        })
    }

    /// Build the message for a notice
    pub fn message(&self, subject: &str, email: &str, username: &str) -> MailMessage {
        MailMessage {
            from: self.from_address.clone(),
            to: email.to_string(),
            subject: subject.to_string(),
            username: username.to_string(),
        }
    }

    async fn send(&self, message: MailMessage) -> Result<(), InfrastructureError> {
        let mut request = self.client.post(&self.relay_url).json(&message);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        request.send().await?.error_for_status()?;

        debug!(to = %mask_email(&message.to), subject = %message.subject, "Mail relayed");
        Ok(())
    }

    async fn deliver(&self, subject: &str, email: &str, username: &str) -> Result<(), String> {
        self.send(self.message(subject, email, username))
            .await
            .map_err(|e| {
                error!(to = %mask_email(email), "Mail relay failed: {}", e);
                e.to_string()
            })
    }
}

#[async_trait]
impl MailServiceTrait for HttpMailService {
    async fn send_registration_mail(&self, email: &str, username: &str) -> Result<(), String> {
        self.deliver(REGISTRATION_SUBJECT, email, username).await
    }

    async fn send_login_mail(&self, email: &str, username: &str) -> Result<(), String> {
        self.deliver(LOGIN_SUBJECT, email, username).await
    }
}
