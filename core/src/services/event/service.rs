//! Per-user calendar event operations

use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::entities::event::{Event, NewEvent};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::EventRepository;

/// Service for listing, creating and deleting a user's events
///
/// Every operation is scoped to the authenticated user; events belonging
/// to someone else behave as if they did not exist.
pub struct EventService<E: EventRepository> {
    repository: Arc<E>,
}

impl<E: EventRepository> EventService<E> {
    pub fn new(repository: Arc<E>) -> Self {
        Self { repository }
    }

    /// All events owned by `user_id`, ordered by start time
    pub async fn list_events(&self, user_id: Uuid) -> DomainResult<Vec<Event>> {
        self.repository.find_by_user(user_id).await
    }

    /// Validate and store a new event for `user_id`
    ///
    /// # Returns
    ///
    /// * `Ok(Event)` - The stored event
    /// * `Err(DomainError::ValidationErr)` - Name outside 5-256 characters
    pub async fn create_event(&self, user_id: Uuid, input: NewEvent) -> DomainResult<Event> {
        let input = input.validate()?;
        let event = self.repository.create(Event::new(user_id, input)).await?;

        info!(event_id = %event.id, user_id = %user_id, "Event created");
        Ok(event)
    }

    /// Delete one of `user_id`'s events
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The event was deleted
    /// * `Err(DomainError::NotFound)` - No such event, or it belongs to another user
    pub async fn delete_event(&self, user_id: Uuid, event_id: Uuid) -> DomainResult<()> {
        if !self.repository.delete_owned(event_id, user_id).await? {
            debug!(event_id = %event_id, user_id = %user_id, "Event not found for delete");
            return Err(DomainError::NotFound {
                resource: "Event".to_string(),
            });
        }

        info!(event_id = %event_id, user_id = %user_id, "Event deleted");
        Ok(())
    }
}
