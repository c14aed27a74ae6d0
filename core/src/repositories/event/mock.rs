//! Mock implementation of EventRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::event::Event;
use crate::errors::DomainError;

use super::r#trait::EventRepository;

/// In-memory event repository for testing
#[derive(Clone, Default)]
pub struct MockEventRepository {
    events: Arc<RwLock<HashMap<Uuid, Event>>>,
}

impl MockEventRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for MockEventRepository {
    async fn create(&self, event: Event) -> Result<Event, DomainError> {
        let mut events = self.events.write().await;
        events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Event>, DomainError> {
        let events = self.events.read().await;
        let mut owned: Vec<Event> = events
            .values()
            .filter(|e| e.is_owned_by(user_id))
            .cloned()
            .collect();
        owned.sort_by_key(|e| e.time_start);
        Ok(owned)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, DomainError> {
        let events = self.events.read().await;
        Ok(events.get(&id).cloned())
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> Result<bool, DomainError> {
        let mut events = self.events.write().await;
        match events.get(&id) {
            Some(event) if event.is_owned_by(user_id) => {
                events.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
