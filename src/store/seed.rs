//! Seed data loading
//!
//! The hosting application owns durability; on startup it hands the store an
//! initial data set, either from a JSON/TOML file or the built-in demo set.

use std::path::Path;
use serde::{Deserialize, Serialize};
use chrono::{TimeZone, Utc};
use tracing::info;
use crate::models::event::{Event, EventCategory, EventId, EventStatus, Organizer};
use crate::models::user::{Role, User, UserId};
use crate::store::{EventStore, UserStore};
use crate::utils::errors::{CampusError, Result};

/// A registration that already exists when the data set is loaded.
/// It is part of the event's seeded `registrations` count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRegistration {
    pub user_id: UserId,
    pub event_id: EventId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub registrations: Vec<SeedRegistration>,
}

/// Load seed data from a `.json` or `.toml` file
pub fn load_seed(path: impl AsRef<Path>) -> Result<SeedData> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;

    let seed = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents)?,
        Some("toml") => toml::from_str(&contents)?,
        other => {
            return Err(CampusError::InvalidInput(format!(
                "unsupported seed file extension: {:?}",
                other
            )))
        }
    };
    Ok(seed)
}

impl SeedData {
    /// Load the data set into empty stores
    pub fn apply(&self, events: &EventStore, users: &UserStore) -> Result<()> {
        for user in &self.users {
            users.insert(user.clone())?;
        }
        for event in &self.events {
            events.insert(event.clone())?;
        }
        for registration in &self.registrations {
            users.get(&registration.user_id)?;
            events.update(&registration.event_id, |record| {
                record.add_registration(registration.user_id.clone())
            })?;
        }

        info!(
            users = self.users.len(),
            events = self.events.len(),
            registrations = self.registrations.len(),
            "Seed data loaded"
        );
        Ok(())
    }

    /// Sample campus: one student, three organizers, one admin and the
    /// three featured events.
    pub fn demo() -> Self {
        let user = |id: &str, name: &str, email: &str, role: Role| User {
            id: UserId::from(id),
            name: name.to_string(),
            email: email.to_string(),
            role,
            avatar: None,
        };
        let organizer = |id: &str, name: &str| Organizer {
            user_id: UserId::from(id),
            name: name.to_string(),
            avatar: None,
        };

        let users = vec![
            user("student-1", "John Doe", "john@university.edu", Role::Student),
            user("org-tech", "Tech Club", "tech@university.edu", Role::Organizer),
            user("org-lit", "Literature Society", "literature@university.edu", Role::Organizer),
            user("org-sports", "Sports Committee", "sports@university.edu", Role::Organizer),
            user("admin-1", "Campus Admin", "admin@university.edu", Role::Admin),
        ];

        let events = vec![
            Event {
                id: EventId::from("1"),
                title: "Tech Conference 2024".to_string(),
                description: "Annual technology conference featuring industry leaders and cutting-edge innovations.".to_string(),
                starts_at: Utc.with_ymd_and_hms(2024, 12, 15, 9, 0, 0).single().unwrap_or_default(),
                ends_at: Utc.with_ymd_and_hms(2024, 12, 15, 17, 0, 0).single(),
                venue: "Main Auditorium".to_string(),
                category: EventCategory::Technology,
                organizer: organizer("org-tech", "Tech Club"),
                max_capacity: 200,
                registrations: 180,
                status: EventStatus::Upcoming,
                poster: Some("https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=400&h=300&fit=crop".to_string()),
            },
            Event {
                id: EventId::from("2"),
                title: "Creative Writing Workshop".to_string(),
                description: "Learn creative writing techniques from published authors and poets.".to_string(),
                starts_at: Utc.with_ymd_and_hms(2024, 12, 18, 14, 0, 0).single().unwrap_or_default(),
                ends_at: Utc.with_ymd_and_hms(2024, 12, 18, 16, 0, 0).single(),
                venue: "Library Hall".to_string(),
                category: EventCategory::Workshop,
                organizer: organizer("org-lit", "Literature Society"),
                max_capacity: 30,
                registrations: 25,
                status: EventStatus::Upcoming,
                poster: Some("https://images.unsplash.com/photo-1455390582262-044cdead277a?w=400&h=300&fit=crop".to_string()),
            },
            Event {
                id: EventId::from("3"),
                title: "Annual Sports Meet".to_string(),
                description: "Inter-departmental sports competition with various indoor and outdoor events.".to_string(),
                starts_at: Utc.with_ymd_and_hms(2024, 12, 20, 8, 0, 0).single().unwrap_or_default(),
                ends_at: Utc.with_ymd_and_hms(2024, 12, 20, 18, 0, 0).single(),
                venue: "Sports Complex".to_string(),
                category: EventCategory::Sports,
                organizer: organizer("org-sports", "Sports Committee"),
                max_capacity: 300,
                registrations: 150,
                status: EventStatus::Upcoming,
                poster: Some("https://images.unsplash.com/photo-1461896836934-ffe607ba8211?w=400&h=300&fit=crop".to_string()),
            },
        ];

        let registrations = vec![
            SeedRegistration { user_id: UserId::from("student-1"), event_id: EventId::from("1") },
            SeedRegistration { user_id: UserId::from("student-1"), event_id: EventId::from("3") },
        ];

        Self { users, events, registrations }
    }
}
