//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

/// Repository trait for refresh-token records
///
/// Only the token identifier and its expiry are persisted; the signed token
/// itself never reaches the store. Every method is a single atomic operation
/// so several server processes can share one store without extra locking.
///
/// # Security Considerations
/// - Deleting a record revokes the refresh token that references it
/// - Expired records are ignored by the refresher and may be purged at any time
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new refresh-token record
    ///
    /// # Arguments
    /// * `record` - The record to persist
    ///
    /// # Returns
    /// * `Ok(RefreshTokenRecord)` - The saved record
    /// * `Err(DomainError)` - Save failed (e.g., duplicate identifier, store unavailable)
    ///
    /// # Example
    /// ```no_run
    /// # use chrono::Duration;
    /// # use dc_core::repositories::TokenRepository;
    /// # use dc_core::domain::entities::token::RefreshTokenRecord;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let record = RefreshTokenRecord::new(Duration::days(5));
    ///
    /// let saved = repo.save_refresh_token(record).await?;
    /// println!("Refresh token {} expires at {}", saved.token_id, saved.expires_at);
    /// # Ok(())
    /// # }
    /// ```
    async fn save_refresh_token(
        &self,
        record: RefreshTokenRecord,
    ) -> Result<RefreshTokenRecord, DomainError>;

    /// Find a record by the identifier embedded in a refresh token
    ///
    /// # Returns
    /// * `Ok(Some(RefreshTokenRecord))` - Record found (it may still be expired)
    /// * `Ok(None)` - No record, the token was revoked or never issued here
    /// * `Err(DomainError)` - Store error occurred
    async fn find_by_token_id(
        &self,
        token_id: Uuid,
    ) -> Result<Option<RefreshTokenRecord>, DomainError>;

    /// Delete a record, revoking its refresh token
    ///
    /// # Returns
    /// * `Ok(true)` - A record was deleted
    /// * `Ok(false)` - No record existed
    /// * `Err(DomainError)` - Store error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use dc_core::repositories::TokenRepository;
    /// # async fn example(repo: &impl TokenRepository, token_id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
    /// if repo.delete_by_token_id(token_id).await? {
    ///     println!("Logged out");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn delete_by_token_id(&self, token_id: Uuid) -> Result<bool, DomainError>;

    /// Delete every record whose expiry has passed
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records deleted
    /// * `Err(DomainError)` - Store error occurred
    async fn delete_expired_tokens(&self) -> Result<usize, DomainError>;

    /// Check whether a record exists and has not expired
    async fn is_token_active(&self, token_id: Uuid) -> Result<bool, DomainError> {
        match self.find_by_token_id(token_id).await? {
            Some(record) => Ok(!record.is_expired()),
            None => Ok(false),
        }
    }
}
