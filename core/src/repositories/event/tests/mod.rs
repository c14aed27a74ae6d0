//! Tests for the in-memory event repository

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::event::{Event, NewEvent};
use crate::repositories::event::{EventRepository, MockEventRepository};

fn event_for(user_id: Uuid, name: &str, offset_hours: i64) -> Event {
    Event::new(
        user_id,
        NewEvent {
            name: name.to_string(),
            description: None,
            time_start: Utc::now() + Duration::hours(offset_hours),
            is_all_day: false,
        },
    )
}

#[tokio::test]
async fn test_find_by_user_returns_only_owned_events_in_order() {
    let repo = MockEventRepository::new();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    repo.create(event_for(alice, "Later meeting", 5)).await.unwrap();
    repo.create(event_for(alice, "Early meeting", 1)).await.unwrap();
    repo.create(event_for(bob, "Bob's meeting", 2)).await.unwrap();

    let events = repo.find_by_user(alice).await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].name, "Early meeting");
    assert!(events.iter().all(|e| e.user_id == alice));
}

#[tokio::test]
async fn test_delete_owned_checks_owner() {
    let repo = MockEventRepository::new();
    let alice = Uuid::new_v4();
    let event = repo.create(event_for(alice, "Planning", 1)).await.unwrap();

    assert!(!repo.delete_owned(event.id, Uuid::new_v4()).await.unwrap());
    assert!(repo.find_by_id(event.id).await.unwrap().is_some());

    assert!(repo.delete_owned(event.id, alice).await.unwrap());
    assert!(repo.find_by_id(event.id).await.unwrap().is_none());
}
