//! Campus Events
//!
//! Demo entry point: loads the data set, walks through a registration
//! scenario and logs every role's dashboard.

use chrono::{TimeZone, Utc};
use tracing::{info, warn};

use campus_events::{
    config::Settings,
    models::{EventCategory, EventId, EventStatus, Organizer, User, UserId, Role, Event},
    services::{AuthContext, ServiceFactory},
    store::{load_seed, EventStore, SeedData, UserStore},
    utils::{helpers, logging},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", campus_events::info());

    // Load the initial data set
    let seed = match settings.seed.seed_path() {
        Some(path) => {
            info!(path = %path, "Loading seed data");
            load_seed(path)?
        }
        None => {
            info!("No seed file configured, using demo data");
            SeedData::demo()
        }
    };

    let events = EventStore::new();
    let users = UserStore::new();
    seed.apply(&events, &users)?;

    let services = ServiceFactory::new(&settings, events.clone(), users.clone());

    run_capacity_scenario(&services, &events, &users).await?;

    for user in users.list() {
        log_dashboard(&services, &settings, &user)?;
    }

    info!("Campus events demo finished.");
    Ok(())
}

/// E1 has two places and one is taken. U1 gets the last place, U2 is turned
/// away, then U1 gives the place back.
async fn run_capacity_scenario(services: &ServiceFactory, events: &EventStore, users: &UserStore) -> anyhow::Result<()> {
    let organizer = users
        .list()
        .into_iter()
        .find(|u| u.role == Role::Organizer)
        .ok_or_else(|| anyhow::anyhow!("data set has no organizer"))?;

    for id in ["U1", "U2"] {
        users.insert(User {
            id: UserId::from(id),
            name: format!("Scenario Student {id}"),
            email: format!("{}@university.edu", id.to_lowercase()),
            role: Role::Student,
            avatar: None,
        })?;
    }

    events.insert(Event {
        id: EventId::from("E1"),
        title: "Capacity Drill".to_string(),
        description: "Two seats, three hopefuls.".to_string(),
        starts_at: Utc.with_ymd_and_hms(2025, 1, 10, 10, 0, 0).single().unwrap_or_default(),
        ends_at: None,
        venue: "Seminar Room 2".to_string(),
        category: EventCategory::Seminar,
        organizer: Organizer {
            user_id: organizer.id.clone(),
            name: organizer.name.clone(),
            avatar: organizer.avatar.clone(),
        },
        max_capacity: 2,
        registrations: 1,
        status: EventStatus::Upcoming,
        poster: None,
    })?;

    let e1 = EventId::from("E1");
    let registration = services.registration_service.clone();

    // Both students race for the last seat; exactly one wins.
    let handles: Vec<_> = ["U1", "U2"]
        .into_iter()
        .map(|id| {
            let registration = registration.clone();
            let event_id = e1.clone();
            tokio::task::spawn_blocking(move || {
                let user_id = UserId::from(id);
                let outcome = registration.register(&user_id, &event_id);
                (user_id, outcome)
            })
        })
        .collect();

    for handle in handles {
        let (user_id, outcome) = handle.await?;
        match outcome {
            Ok(event) => info!(user_id = %user_id, "{}", helpers::capacity_label(&event)),
            Err(e) => warn!(user_id = %user_id, error = %e, severity = %e.severity(), "Registration refused"),
        }
    }

    for id in ["U1", "U2"] {
        let user_id = UserId::from(id);
        if registration.is_registered(&user_id, &e1)? {
            let event = registration.unregister(&user_id, &e1)?;
            info!(user_id = %user_id, "After unregistering: {}", helpers::capacity_label(&event));
        }
    }

    Ok(())
}

fn log_dashboard(services: &ServiceFactory, settings: &Settings, user: &User) -> anyhow::Result<()> {
    let ctx = AuthContext::from(user);
    let dashboard = &services.dashboard_service;

    info!(
        user = %user.name,
        initials = %user.initials(),
        title = user.role.dashboard_title(),
        subtitle = user.role.dashboard_subtitle(),
        "Dashboard"
    );

    for card in dashboard.stat_cards(&ctx, None)? {
        logging::log_dashboard_metric(user.role, card.title, &card.value.to_string());
    }

    for event in dashboard.featured_events(&ctx, settings.dashboard.recommended_limit)? {
        let actions = dashboard.card_actions(&ctx, &event.id)?;
        info!(
            heading = user.role.featured_heading(),
            event = %helpers::truncate_text(&event.title, 40),
            date = %helpers::format_event_date(event.starts_at),
            time = %helpers::format_event_time(&event),
            capacity = %helpers::capacity_label(&event),
            actions = ?actions,
            "Featured event"
        );
    }

    let upcoming = dashboard.upcoming_events(settings.dashboard.upcoming_limit);
    info!(role = %user.role, upcoming = upcoming.len(), menu = ?user.role.menu(), "Navigation ready");
    Ok(())
}
