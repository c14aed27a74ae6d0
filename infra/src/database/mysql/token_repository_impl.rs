//! MySQL implementation of the TokenRepository trait.
//!
//! Only the refresh token's identifier and expiry are stored. Deleting a row
//! revokes the refresh token that references it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use dc_core::domain::entities::token::RefreshTokenRecord;
use dc_core::errors::DomainError;
use dc_core::repositories::TokenRepository;

use super::{db_error, parse_uuid};

/// MySQL implementation of TokenRepository
#[derive(Clone)]
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to RefreshTokenRecord
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<RefreshTokenRecord, DomainError> {
        let token_id: String = row
            .try_get("token_id")
            .map_err(|e| db_error("Failed to get token_id", e))?;

        Ok(RefreshTokenRecord {
            token_id: parse_uuid("token_id", &token_id)?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| db_error("Failed to get expires_at", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save_refresh_token(
        &self,
        record: RefreshTokenRecord,
    ) -> Result<RefreshTokenRecord, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (token_id, expires_at, created_at)
            VALUES (?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(record.token_id.to_string())
            .bind(record.expires_at)
            .bind(record.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to save refresh token", e))?;

        Ok(record)
    }

    async fn find_by_token_id(
        &self,
        token_id: Uuid,
    ) -> Result<Option<RefreshTokenRecord>, DomainError> {
        let query = r#"
            SELECT token_id, expires_at, created_at
            FROM refresh_tokens
            WHERE token_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find refresh token", e))?;

        result.as_ref().map(Self::row_to_record).transpose()
    }

    async fn delete_by_token_id(&self, token_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE token_id = ?")
            .bind(token_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete refresh token", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired_tokens(&self) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at < ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete expired tokens", e))?;

        Ok(result.rows_affected() as usize)
    }
}
