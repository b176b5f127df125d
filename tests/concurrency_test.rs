//! Concurrent registration against a shared event store

mod helpers;

use std::sync::Arc;
use std::thread;

use futures::future::join_all;
use campus_events::models::{EventId, EventStatus, Role, UserId};
use campus_events::CampusError;
use helpers::*;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_last_seat_has_one_winner() {
    let campus = TestCampus::new();
    let contenders: Vec<String> = (0..16).map(|i| format!("S{i}")).collect();
    for id in &contenders {
        campus.add_user(id, Role::Student);
    }
    let e1 = campus.add_event(event("E1", "O1", 9, 10, EventStatus::Upcoming));

    let tasks = contenders.iter().map(|id| {
        let registration = campus.services.registration_service.clone();
        let user_id = UserId::from(id.as_str());
        let event_id = e1.clone();
        tokio::task::spawn_blocking(move || registration.register(&user_id, &event_id))
    });

    let outcomes: Vec<_> = join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.expect("registration task panicked"))
        .collect();

    let winners = outcomes.iter().filter(|o| o.is_ok()).count();
    let full = outcomes
        .iter()
        .filter(|o| matches!(o, Err(CampusError::EventFull { .. })))
        .count();
    assert_eq!(winners, 1);
    assert_eq!(full, contenders.len() - 1);

    let event = campus.events.get(&e1).unwrap();
    assert_eq!(event.registrations, event.max_capacity);
    assert_eq!(campus.services.registration_service.participants(&e1).unwrap().len(), 1);
}

#[test]
fn test_parallel_round_trips_leave_count_unchanged() {
    let campus = Arc::new(TestCampus::new());
    for i in 0..8 {
        campus.add_user(&format!("S{i}"), Role::Student);
    }
    let e1 = campus.add_event(event("E1", "O1", 3, 20, EventStatus::Upcoming));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let campus = Arc::clone(&campus);
            let event_id = e1.clone();
            thread::spawn(move || {
                let user_id = UserId::from(format!("S{i}").as_str());
                let registration = &campus.services.registration_service;
                for _ in 0..25 {
                    registration.register(&user_id, &event_id).unwrap();
                    registration.unregister(&user_id, &event_id).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    assert_eq!(campus.events.get(&e1).unwrap().registrations, 3);
    assert!(campus.services.registration_service.participants(&e1).unwrap().is_empty());
}

#[test]
fn test_events_do_not_block_each_other() {
    let campus = Arc::new(TestCampus::new());
    campus.add_user("S1", Role::Student);
    for i in 0..4 {
        campus.add_event(event(&format!("E{i}"), "O1", 0, 1, EventStatus::Upcoming));
    }

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let campus = Arc::clone(&campus);
            thread::spawn(move || {
                campus
                    .services
                    .registration_service
                    .register(&UserId::from("S1"), &EventId::from(format!("E{i}").as_str()))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("worker panicked").is_ok());
    }
    assert!(campus.events.list().iter().all(|e| e.is_full()));
}
