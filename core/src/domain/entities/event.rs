//! Calendar event entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dc_shared::utils::validation::validators;

use crate::errors::ValidationError;

/// Minimum event name length in characters
pub const EVENT_NAME_MIN_LENGTH: usize = 5;

/// Maximum event name length in characters
pub const EVENT_NAME_MAX_LENGTH: usize = 256;

/// A calendar entry owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,

    /// Owner of the event
    pub user_id: Uuid,

    pub name: String,

    pub description: Option<String>,

    /// When the event starts
    pub time_start: DateTime<Utc>,

    pub is_all_day: bool,

    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the client when creating an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub description: Option<String>,
    pub time_start: DateTime<Utc>,
    pub is_all_day: bool,
}

impl NewEvent {
    /// Validates the name length and drops a blank description
    pub fn validate(mut self) -> Result<Self, ValidationError> {
        self.name = self.name.trim().to_string();
        if !validators::length_between(&self.name, EVENT_NAME_MIN_LENGTH, EVENT_NAME_MAX_LENGTH) {
            return Err(ValidationError::InvalidLength {
                field: "name".to_string(),
                min: EVENT_NAME_MIN_LENGTH,
                max: EVENT_NAME_MAX_LENGTH,
                actual: self.name.chars().count(),
            });
        }
        self.description = self
            .description
            .filter(|description| validators::not_empty(description));
        Ok(self)
    }
}

impl Event {
    /// Creates an event for `user_id` from validated input
    pub fn new(user_id: Uuid, input: NewEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: input.name,
            description: input.description,
            time_start: input.time_start,
            is_all_day: input.is_all_day,
            created_at: Utc::now(),
        }
    }

    /// Whether `user_id` owns this event
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}
