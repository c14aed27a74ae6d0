//! MySQL implementation of the EventRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use dc_core::domain::entities::event::Event;
use dc_core::errors::DomainError;
use dc_core::repositories::EventRepository;

use super::{db_error, parse_uuid};

/// MySQL implementation of EventRepository
#[derive(Clone)]
pub struct MySqlEventRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlEventRepository {
    /// Create a new MySQL event repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_event(row: &sqlx::mysql::MySqlRow) -> Result<Event, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| db_error("Failed to get user_id", e))?;

        Ok(Event {
            id: parse_uuid("id", &id)?,
            user_id: parse_uuid("user_id", &user_id)?,
            name: row
                .try_get("name")
                .map_err(|e| db_error("Failed to get name", e))?,
            description: row
                .try_get("description")
                .map_err(|e| db_error("Failed to get description", e))?,
            time_start: row
                .try_get::<DateTime<Utc>, _>("time_start")
                .map_err(|e| db_error("Failed to get time_start", e))?,
            is_all_day: row
                .try_get("is_all_day")
                .map_err(|e| db_error("Failed to get is_all_day", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
        })
    }
}

#[async_trait]
impl EventRepository for MySqlEventRepository {
    async fn create(&self, event: Event) -> Result<Event, DomainError> {
        let query = r#"
            INSERT INTO events (id, user_id, name, description, time_start, is_all_day, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(event.id.to_string())
            .bind(event.user_id.to_string())
            .bind(&event.name)
            .bind(&event.description)
            .bind(event.time_start)
            .bind(event.is_all_day)
            .bind(event.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create event", e))?;

        Ok(event)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Event>, DomainError> {
        let query = r#"
            SELECT id, user_id, name, description, time_start, is_all_day, created_at
            FROM events
            WHERE user_id = ?
            ORDER BY time_start ASC, created_at ASC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list events", e))?;

        rows.iter().map(Self::row_to_event).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, DomainError> {
        let query = r#"
            SELECT id, user_id, name, description, time_start, is_all_day, created_at
            FROM events
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find event", e))?;

        result.as_ref().map(Self::row_to_event).transpose()
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM events WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete event", e))?;

        Ok(result.rows_affected() > 0)
    }
}
