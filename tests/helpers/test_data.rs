//! Test data helpers for creating test objects

use chrono::{Duration, TimeZone, Utc};
use campus_events::models::{Event, EventCategory, EventId, EventStatus, Organizer, Role, User, UserId};

/// Helper function to create a test user
pub fn user(id: &str, role: Role) -> User {
    User {
        id: UserId::from(id),
        name: format!("Test {id}"),
        email: format!("{}@university.edu", id.to_lowercase()),
        role,
        avatar: None,
    }
}

/// Helper function to create a test event
pub fn event(id: &str, organizer: &str, registrations: u32, max_capacity: u32, status: EventStatus) -> Event {
    Event {
        id: EventId::from(id),
        title: format!("Event {id}"),
        description: "Test event".to_string(),
        starts_at: Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap(),
        ends_at: None,
        venue: "Great Hall".to_string(),
        category: EventCategory::Academic,
        organizer: Organizer {
            user_id: UserId::from(organizer),
            name: format!("Organizer {organizer}"),
            avatar: None,
        },
        max_capacity,
        registrations,
        status,
        poster: None,
    }
}

/// Same as [`event`] but starting `days` after the base date
pub fn event_on_day(id: &str, organizer: &str, days: i64, status: EventStatus) -> Event {
    let mut e = event(id, organizer, 0, 50, status);
    e.starts_at += Duration::days(days);
    e
}
