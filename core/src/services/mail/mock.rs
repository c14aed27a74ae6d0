//! Recording mail service for tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::traits::MailServiceTrait;

/// A notice captured by [`RecordingMailService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentMail {
    Registration { email: String, username: String },
    Login { email: String, username: String },
}

/// Mail service that records every notice instead of delivering it
#[derive(Clone, Default)]
pub struct RecordingMailService {
    sent: Arc<Mutex<Vec<SentMail>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingMailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent send fail
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Notices recorded so far
    pub async fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().await.clone()
    }

    async fn record(&self, mail: SentMail) -> Result<(), String> {
        if self.failing.load(Ordering::SeqCst) {
            return Err("mail relay unavailable".to_string());
        }
        self.sent.lock().await.push(mail);
        Ok(())
    }
}

#[async_trait]
impl MailServiceTrait for RecordingMailService {
    async fn send_registration_mail(&self, email: &str, username: &str) -> Result<(), String> {
        self.record(SentMail::Registration {
            email: email.to_string(),
            username: username.to_string(),
        })
        .await
    }

    async fn send_login_mail(&self, email: &str, username: &str) -> Result<(), String> {
        self.record(SentMail::Login {
            email: email.to_string(),
            username: username.to_string(),
        })
        .await
    }
}
