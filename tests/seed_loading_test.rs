//! Loading data sets from disk

mod helpers;

use std::io::Write;

use assert_matches::assert_matches;
use tempfile::Builder;
use campus_events::models::{EventId, EventStatus, UserId};
use campus_events::store::{load_seed, EventStore, UserStore};
use campus_events::CampusError;
use helpers::*;

const JSON_SEED: &str = r#"{
  "users": [
    { "id": "s1", "name": "Ada Student", "email": "ada@university.edu", "role": "student" },
    { "id": "o1", "name": "Chess Club", "email": "chess@university.edu", "role": "organizer" }
  ],
  "events": [
    {
      "id": "chess-open",
      "title": "Chess Open",
      "description": "Rapid tournament",
      "starts_at": "2025-02-01T10:00:00Z",
      "venue": "Room 101",
      "category": "Sports",
      "organizer": { "user_id": "o1", "name": "Chess Club" },
      "max_capacity": 16,
      "registrations": 3,
      "status": "upcoming"
    }
  ],
  "registrations": [ { "user_id": "s1", "event_id": "chess-open" } ]
}"#;

const TOML_SEED: &str = r#"
[[users]]
id = "s1"
name = "Ada Student"
email = "ada@university.edu"
role = "student"

[[events]]
id = "poetry"
title = "Poetry Night"
starts_at = "2025-03-14T19:00:00Z"
venue = "Library Hall"
category = "Cultural"
max_capacity = 40
status = "completed"

[events.organizer]
user_id = "o9"
name = "Literature Society"
"#;

fn write_seed(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_json_seed() {
    init_test_logging();
    let file = write_seed(".json", JSON_SEED);
    let seed = load_seed(file.path()).unwrap();

    let events = EventStore::new();
    let users = UserStore::new();
    seed.apply(&events, &users).unwrap();

    let record = events.record(&EventId::from("chess-open")).unwrap();
    assert_eq!(record.event.registrations, 3);
    assert!(record.is_registered(&UserId::from("s1")));
    assert_eq!(users.count(), 2);
}

#[test]
fn test_load_toml_seed() {
    init_test_logging();
    let file = write_seed(".toml", TOML_SEED);
    let seed = load_seed(file.path()).unwrap();

    assert_eq!(seed.users.len(), 1);
    assert!(seed.registrations.is_empty());
    let event = &seed.events[0];
    assert_eq!(event.status, EventStatus::Completed);
    assert_eq!(event.registrations, 0);
    assert_eq!(event.description, "");
}

#[test]
fn test_rejected_seed_files() {
    init_test_logging();
    let file = write_seed(".yaml", "users: []");
    assert_matches!(load_seed(file.path()), Err(CampusError::InvalidInput(_)));

    let file = write_seed(".json", "{ not json");
    assert_matches!(load_seed(file.path()), Err(CampusError::Serialization(_)));

    assert_matches!(load_seed("/nonexistent/seed.json"), Err(CampusError::Io(_)));
}

#[test]
fn test_over_capacity_seed_is_refused() {
    init_test_logging();
    let file = write_seed(".json", &JSON_SEED.replace("\"registrations\": 3", "\"registrations\": 17"));
    let seed = load_seed(file.path()).unwrap();

    assert_matches!(
        seed.apply(&EventStore::new(), &UserStore::new()),
        Err(CampusError::InvalidInput(_))
    );
}
