//! Event model

use std::fmt;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::models::user::UserId;

/// Opaque event identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Technology,
    Workshop,
    Conference,
    Seminar,
    Sports,
    Cultural,
    Academic,
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventCategory::Technology => "Technology",
            EventCategory::Workshop => "Workshop",
            EventCategory::Conference => "Conference",
            EventCategory::Seminar => "Seminar",
            EventCategory::Sports => "Sports",
            EventCategory::Cultural => "Cultural",
            EventCategory::Academic => "Academic",
        };
        f.write_str(name)
    }
}

/// Lifecycle status of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl EventStatus {
    /// Completed and cancelled events never change status again
    pub fn is_terminal(self) -> bool {
        matches!(self, EventStatus::Completed | EventStatus::Cancelled)
    }

    /// Whether an organizer may move an event from `self` to `next`.
    /// Staying in the same status is always allowed.
    pub fn can_transition_to(self, next: EventStatus) -> bool {
        if self == next {
            return true;
        }
        if self.is_terminal() {
            return false;
        }
        matches!(
            (self, next),
            (EventStatus::Upcoming, EventStatus::Ongoing)
                | (EventStatus::Ongoing, EventStatus::Completed)
                | (EventStatus::Upcoming, EventStatus::Cancelled)
                | (EventStatus::Ongoing, EventStatus::Cancelled)
        )
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Who runs the event, as shown on event cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    pub venue: String,
    pub category: EventCategory,
    pub organizer: Organizer,
    pub max_capacity: u32,
    #[serde(default)]
    pub registrations: u32,
    pub status: EventStatus,
    #[serde(default)]
    pub poster: Option<String>,
}

impl Event {
    pub fn is_full(&self) -> bool {
        self.registrations >= self.max_capacity
    }

    pub fn remaining_capacity(&self) -> u32 {
        self.max_capacity.saturating_sub(self.registrations)
    }

    /// Share of places taken, clamped to `0.0..=1.0`
    pub fn fill_ratio(&self) -> f64 {
        if self.max_capacity == 0 {
            return 0.0;
        }
        (f64::from(self.registrations) / f64::from(self.max_capacity)).clamp(0.0, 1.0)
    }

    /// Students can still sign up for this event
    pub fn is_registration_open(&self) -> bool {
        self.status == EventStatus::Upcoming && !self.is_full()
    }

    pub fn is_organized_by(&self, user_id: &UserId) -> bool {
        &self.organizer.user_id == user_id
    }

    /// Check the capacity invariant `0 <= registrations <= max_capacity`
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err(format!("event {} has an empty title", self.id));
        }
        if self.max_capacity == 0 {
            return Err(format!("event {} must have a positive capacity", self.id));
        }
        if self.registrations > self.max_capacity {
            return Err(format!(
                "event {} has {} registrations but capacity {}",
                self.id, self.registrations, self.max_capacity
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub venue: String,
    pub category: EventCategory,
    pub organizer: Organizer,
    pub max_capacity: u32,
    pub poster: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub category: Option<EventCategory>,
    pub poster: Option<String>,
    pub max_capacity: Option<u32>,
    pub status: Option<EventStatus>,
}

impl UpdateEventRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.starts_at.is_none()
            && self.venue.is_none()
            && self.category.is_none()
            && self.poster.is_none()
            && self.max_capacity.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_event(registrations: u32, max_capacity: u32) -> Event {
        Event {
            id: EventId::from("E1"),
            title: "Robotics Night".to_string(),
            description: String::new(),
            starts_at: Utc.with_ymd_and_hms(2024, 12, 15, 9, 0, 0).unwrap(),
            ends_at: None,
            venue: "Main Auditorium".to_string(),
            category: EventCategory::Technology,
            organizer: Organizer {
                user_id: UserId::from("org-1"),
                name: "Tech Club".to_string(),
                avatar: None,
            },
            max_capacity,
            registrations,
            status: EventStatus::Upcoming,
            poster: None,
        }
    }

    #[test]
    fn test_status_transitions() {
        assert!(EventStatus::Upcoming.can_transition_to(EventStatus::Ongoing));
        assert!(EventStatus::Ongoing.can_transition_to(EventStatus::Completed));
        assert!(EventStatus::Upcoming.can_transition_to(EventStatus::Cancelled));
        assert!(EventStatus::Completed.can_transition_to(EventStatus::Completed));

        assert!(!EventStatus::Completed.can_transition_to(EventStatus::Upcoming));
        assert!(!EventStatus::Cancelled.can_transition_to(EventStatus::Ongoing));
        assert!(!EventStatus::Upcoming.can_transition_to(EventStatus::Completed));

        assert!(EventStatus::Cancelled.is_terminal());
        assert!(EventStatus::Completed.is_terminal());
        assert!(!EventStatus::Ongoing.is_terminal());
    }

    #[test]
    fn test_capacity_helpers() {
        let event = sample_event(180, 200);
        assert!(!event.is_full());
        assert_eq!(event.remaining_capacity(), 20);
        assert!((event.fill_ratio() - 0.9).abs() < f64::EPSILON);
        assert!(event.is_registration_open());

        let full = sample_event(200, 200);
        assert!(full.is_full());
        assert!(!full.is_registration_open());
    }

    #[test]
    fn test_validate_rejects_overbooked_event() {
        assert!(sample_event(3, 2).validate().is_err());
        assert!(sample_event(0, 0).validate().is_err());
        assert!(sample_event(2, 2).validate().is_ok());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&EventStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
    }
}
