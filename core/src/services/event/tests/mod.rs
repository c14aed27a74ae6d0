//! Tests for the event service

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::event::NewEvent;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{EventRepository, MockEventRepository};
use crate::services::event::EventService;

fn service() -> (EventService<MockEventRepository>, MockEventRepository) {
    let repo = MockEventRepository::new();
    (EventService::new(Arc::new(repo.clone())), repo)
}

fn standup(offset_hours: i64) -> NewEvent {
    NewEvent {
        name: "Daily standup".to_string(),
        description: Some("  ".to_string()),
        time_start: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()
            + Duration::hours(offset_hours),
        is_all_day: false,
    }
}

#[tokio::test]
async fn test_create_event_validates_and_stores() {
    let (service, repo) = service();
    let user_id = Uuid::new_v4();

    let event = service.create_event(user_id, standup(0)).await.unwrap();

    assert_eq!(event.user_id, user_id);
    assert_eq!(event.name, "Daily standup");
    assert_eq!(event.description, None);
    assert_eq!(repo.find_by_id(event.id).await.unwrap(), Some(event));
}

#[tokio::test]
async fn test_create_event_rejects_short_name() {
    let (service, _) = service();
    let mut input = standup(0);
    input.name = "abcd".to_string();

    let result = service.create_event(Uuid::new_v4(), input).await;

    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidLength { .. }))
    ));
}

#[tokio::test]
async fn test_list_events_only_returns_own_events_in_order() {
    let (service, _) = service();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let later = service.create_event(alice, standup(5)).await.unwrap();
    let earlier = service.create_event(alice, standup(1)).await.unwrap();
    service.create_event(bob, standup(2)).await.unwrap();

    let events = service.list_events(alice).await.unwrap();

    assert_eq!(events, vec![earlier, later]);
}

#[tokio::test]
async fn test_delete_event_requires_ownership() {
    let (service, _) = service();
    let owner = Uuid::new_v4();
    let event = service.create_event(owner, standup(0)).await.unwrap();

    let result = service.delete_event(Uuid::new_v4(), event.id).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));

    service.delete_event(owner, event.id).await.unwrap();
    assert!(service.list_events(owner).await.unwrap().is_empty());

    let result = service.delete_event(owner, event.id).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}
