//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// In-memory token repository for testing
#[derive(Clone)]
pub struct MockTokenRepository {
    records: Arc<RwLock<HashMap<Uuid, RefreshTokenRecord>>>,
    unavailable: Arc<AtomicBool>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent call fail as if the store were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Overwrite the stored expiry of a record
    pub async fn set_expiry(&self, token_id: Uuid, expires_at: DateTime<Utc>) -> bool {
        let mut records = self.records.write().await;
        match records.get_mut(&token_id) {
            Some(record) => {
                record.expires_at = expires_at;
                true
            }
            None => false,
        }
    }

    /// IDs of every stored record
    pub async fn token_ids(&self) -> Vec<Uuid> {
        self.records.read().await.keys().copied().collect()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the repository holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::internal("token store unavailable"));
        }
        Ok(())
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save_refresh_token(
        &self,
        record: RefreshTokenRecord,
    ) -> Result<RefreshTokenRecord, DomainError> {
        self.check_available()?;
        let mut records = self.records.write().await;

        if records.contains_key(&record.token_id) {
            return Err(DomainError::internal("Duplicate refresh token id"));
        }

        records.insert(record.token_id, record.clone());
        Ok(record)
    }

    async fn find_by_token_id(
        &self,
        token_id: Uuid,
    ) -> Result<Option<RefreshTokenRecord>, DomainError> {
        self.check_available()?;
        let records = self.records.read().await;
        Ok(records.get(&token_id).cloned())
    }

    async fn delete_by_token_id(&self, token_id: Uuid) -> Result<bool, DomainError> {
        self.check_available()?;
        let mut records = self.records.write().await;
        Ok(records.remove(&token_id).is_some())
    }

    async fn delete_expired_tokens(&self) -> Result<usize, DomainError> {
        self.check_available()?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| !record.is_expired());
        Ok(before - records.len())
    }
}
