use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use dc_core::domain::entities::event::{Event, NewEvent};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// RFC 3339 start time
    pub time_start: DateTime<Utc>,

    #[validate(length(min = 5, max = 256))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub is_all_day: bool,
}

impl From<CreateEventRequest> for NewEvent {
    fn from(request: CreateEventRequest) -> Self {
        NewEvent {
            name: request.name,
            description: request.description,
            time_start: request.time_start,
            is_all_day: request.is_all_day,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEventRequest {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventListResponse {
    pub status: u16,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreatedResponse {
    pub status: u16,
    pub message: String,
    pub event_id: Uuid,
}
