//! Background purge of expired refresh-token records
//!
//! Expired records are already ignored by the refresher, so purging only
//! keeps the table small. The service is disabled unless configured.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use dc_shared::config::CleanupConfig;

use crate::repositories::TokenRepository;

/// Configuration for token cleanup service
#[derive(Debug, Clone)]
pub struct TokenCleanupConfig {
    /// Seconds between purge runs
    pub interval_seconds: u64,
    pub enabled: bool,
}

impl Default for TokenCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600,
            enabled: false,
        }
    }
}

impl From<&CleanupConfig> for TokenCleanupConfig {
    fn from(config: &CleanupConfig) -> Self {
        Self {
            interval_seconds: config.interval_seconds,
            enabled: config.enabled,
        }
    }
}

impl TokenCleanupConfig {
    fn period(&self) -> Duration {
        Duration::from_secs(self.interval_seconds.max(1))
    }
}

/// Outcome of one purge run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PurgeReport {
    /// Records removed by this run
    pub deleted: usize,
    /// Store failure, if the delete did not go through
    pub failure: Option<String>,
}

impl PurgeReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Periodically deletes refresh-token records whose `expires_at` has passed
pub struct TokenCleanupService<R: TokenRepository + 'static> {
    repository: Arc<R>,
    config: TokenCleanupConfig,
}

impl<R: TokenRepository> TokenCleanupService<R> {
    pub fn new(repository: Arc<R>, config: TokenCleanupConfig) -> Self {
        Self { repository, config }
    }

    /// Run one purge. A disabled service reports zero deletions without
    /// touching the store; store failures are reported, not returned.
    pub async fn purge_once(&self) -> PurgeReport {
        if !self.config.enabled {
            return PurgeReport::default();
        }

        let started = Instant::now();
        match self.repository.delete_expired_tokens().await {
            Ok(deleted) => {
                debug!(
                    deleted,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Purged expired refresh tokens"
                );
                PurgeReport {
                    deleted,
                    failure: None,
                }
            }
            Err(e) => PurgeReport {
                deleted: 0,
                failure: Some(e.to_string()),
            },
        }
    }

    /// Spawn the purge loop on the current tokio runtime
    ///
    /// Returns `None` when the service is disabled. The first purge runs
    /// immediately, then once per configured interval.
    pub fn spawn(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            info!("Refresh-token purge is disabled");
            return None;
        }

        let period = self.config.period();
        info!(interval_seconds = period.as_secs(), "Starting refresh-token purge");

        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let report = self.purge_once().await;
                match report.failure {
                    Some(failure) => warn!("Refresh-token purge failed: {}", failure),
                    None if report.deleted > 0 => {
                        info!(deleted = report.deleted, "Refresh-token purge completed")
                    }
                    None => {}
                }
            }
        }))
    }
}
