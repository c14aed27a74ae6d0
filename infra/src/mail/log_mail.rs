//! Log-only mail service
//!
//! Used in development and whenever no relay is configured. Each notice is
//! written as one structured `info` line with the recipient masked.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use dc_core::services::mail::MailServiceTrait;

use super::{mask_email, LOGIN_SUBJECT, REGISTRATION_SUBJECT};

/// Mail service that logs notices instead of sending them
#[derive(Clone)]
pub struct LogMailService {
    from_address: String,
    /// Number of notices logged
    sent_count: Arc<AtomicU64>,
}

impl LogMailService {
    pub fn new(from_address: &str) -> Self {
        Self {
            from_address: from_address.to_string(),
            sent_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get the total number of notices logged
    pub fn sent_count(&self) -> u64 {
        self.sent_count.load(Ordering::SeqCst)
    }

    fn log(&self, subject: &str, email: &str, username: &str) {
        self.sent_count.fetch_add(1, Ordering::SeqCst);
        info!(
            from = %self.from_address,
            to = %mask_email(email),
            username = %username,
            subject = %subject,
            "Mail notice (log only)"
        );
    }
}

#[async_trait]
impl MailServiceTrait for LogMailService {
    async fn send_registration_mail(&self, email: &str, username: &str) -> Result<(), String> {
        self.log(REGISTRATION_SUBJECT, email, username);
        Ok(())
    }

    async fn send_login_mail(&self, email: &str, username: &str) -> Result<(), String> {
        self.log(LOGIN_SUBJECT, email, username);
        Ok(())
    }
}
