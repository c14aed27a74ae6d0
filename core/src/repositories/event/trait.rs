//! Event repository trait for calendar entries.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::event::Event;
use crate::errors::DomainError;

/// Repository trait for calendar events
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Persist a new event
    async fn create(&self, event: Event) -> Result<Event, DomainError>;

    /// All events owned by a user, ordered by start time
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Event>, DomainError>;

    /// Find a single event by ID regardless of owner
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, DomainError>;

    /// Delete an event only if `user_id` owns it
    ///
    /// # Returns
    /// * `Ok(true)` - The event was deleted
    /// * `Ok(false)` - No event with this ID belongs to the user
    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> Result<bool, DomainError>;
}
