//! Registration rules end to end
//!
//! Exercises the registration service against a wired campus: capacity,
//! lifecycle status, the per-user relation and the round-trip law.

mod helpers;

use assert_matches::assert_matches;
use campus_events::config::Settings;
use campus_events::models::{EventId, EventStatus, Role, UserId};
use campus_events::CampusError;
use helpers::*;

#[test]
fn test_last_seat_scenario() {
    let campus = TestCampus::new();
    campus.add_user("U1", Role::Student);
    campus.add_user("U2", Role::Student);
    let e1 = campus.add_event(event("E1", "O1", 1, 2, EventStatus::Upcoming));
    let registration = &campus.services.registration_service;
    let (u1, u2) = (UserId::from("U1"), UserId::from("U2"));

    let event = registration.register(&u1, &e1).unwrap();
    assert_eq!(event.registrations, 2);

    assert_matches!(
        registration.register(&u2, &e1),
        Err(CampusError::EventFull { capacity: 2, .. })
    );
    assert_eq!(campus.events.get(&e1).unwrap().registrations, 2);
    assert!(!registration.is_registered(&u2, &e1).unwrap());

    let event = registration.unregister(&u1, &e1).unwrap();
    assert_eq!(event.registrations, 1);
}

#[test]
fn test_closed_events_reject_registration() {
    let campus = TestCampus::new();
    campus.add_user("U1", Role::Student);
    let user = UserId::from("U1");

    for (id, status) in [("C1", EventStatus::Cancelled), ("C2", EventStatus::Completed), ("C3", EventStatus::Ongoing)] {
        let event_id = campus.add_event(event(id, "O1", 0, 10, status));
        assert_matches!(
            campus.services.registration_service.register(&user, &event_id),
            Err(CampusError::EventNotUpcoming { status: s, .. }) if s == status
        );
        assert_eq!(campus.events.get(&event_id).unwrap().registrations, 0);
    }
}

#[test]
fn test_unregister_without_registration() {
    let campus = TestCampus::new();
    campus.add_user("U1", Role::Student);
    let e1 = campus.add_event(event("E1", "O1", 4, 10, EventStatus::Upcoming));

    assert_matches!(
        campus.services.registration_service.unregister(&UserId::from("U1"), &e1),
        Err(CampusError::NotRegistered { .. })
    );
    assert_eq!(campus.events.get(&e1).unwrap().registrations, 4);

    assert_matches!(
        campus.services.registration_service.unregister(&UserId::from("U1"), &EventId::from("missing")),
        Err(CampusError::EventNotFound { .. })
    );
}

#[test]
fn test_unregister_after_cancellation_is_refused() {
    let campus = TestCampus::new();
    campus.add_user("U1", Role::Student);
    campus.add_user("O1", Role::Organizer);
    let e1 = campus.add_event(event("E1", "O1", 0, 10, EventStatus::Upcoming));
    let u1 = UserId::from("U1");

    campus.services.registration_service.register(&u1, &e1).unwrap();
    campus.services.event_service.cancel_event(&campus.ctx("O1"), &e1).unwrap();

    assert_matches!(
        campus.services.registration_service.unregister(&u1, &e1),
        Err(CampusError::EventNotUpcoming { status: EventStatus::Cancelled, .. })
    );
    assert!(campus.services.registration_service.is_registered(&u1, &e1).unwrap());
}

#[test]
fn test_idempotent_unregister_configuration() {
    let mut settings = Settings::default();
    settings.registration.idempotent_unregister = true;
    let campus = TestCampus::with_settings(settings);
    campus.add_user("U1", Role::Student);
    let e1 = campus.add_event(event("E1", "O1", 0, 10, EventStatus::Upcoming));
    let u1 = UserId::from("U1");
    let registration = &campus.services.registration_service;

    registration.register(&u1, &e1).unwrap();
    assert_eq!(registration.unregister(&u1, &e1).unwrap().registrations, 0);
    assert_eq!(registration.unregister(&u1, &e1).unwrap().registrations, 0);
}

#[test]
fn test_registrations_for_user_follow_store_order() {
    let campus = TestCampus::demo();
    let registration = &campus.services.registration_service;
    let student = UserId::from("student-1");

    registration.register(&student, &EventId::from("2")).unwrap();
    let titles: Vec<String> = registration
        .registrations_for_user(&student)
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, vec!["Tech Conference 2024", "Creative Writing Workshop", "Annual Sports Meet"]);

    assert_matches!(
        registration.registrations_for_user(&UserId::from("ghost")),
        Err(CampusError::UserNotFound { .. })
    );
}

#[test]
fn test_participants_in_registration_order() {
    let campus = TestCampus::new();
    for id in ["A", "B", "C"] {
        campus.add_user(id, Role::Student);
    }
    let e1 = campus.add_event(event("E1", "O1", 0, 10, EventStatus::Upcoming));
    let registration = &campus.services.registration_service;

    for id in ["B", "A", "C"] {
        registration.register(&UserId::from(id), &e1).unwrap();
    }
    registration.unregister(&UserId::from("A"), &e1).unwrap();

    let order: Vec<String> = registration
        .participants(&e1)
        .unwrap()
        .into_iter()
        .map(|r| r.user_id.to_string())
        .collect();
    assert_eq!(order, vec!["B", "C"]);
}
