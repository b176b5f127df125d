//! Test context for unified test setup
//!
//! Builds empty stores, wires every service against them and initializes
//! tracing once per test binary.

use std::sync::Once;
use campus_events::config::Settings;
use campus_events::models::{Event, EventId, Role, User, UserId};
use campus_events::services::{AuthContext, ServiceFactory};
use campus_events::store::{EventStore, SeedData, UserStore};

use super::test_data::user;

static INIT: Once = Once::new();

/// Initialize logging for tests (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Stores plus the services sharing them
pub struct TestCampus {
    pub events: EventStore,
    pub users: UserStore,
    pub services: ServiceFactory,
    pub settings: Settings,
}

impl TestCampus {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        init_test_logging();

        let events = EventStore::new();
        let users = UserStore::new();
        let services = ServiceFactory::new(&settings, events.clone(), users.clone());

        Self {
            events,
            users,
            services,
            settings,
        }
    }

    /// Campus preloaded with the demo data set
    pub fn demo() -> Self {
        let campus = Self::new();
        SeedData::demo()
            .apply(&campus.events, &campus.users)
            .expect("demo data should load");
        campus
    }

    pub fn add_user(&self, id: &str, role: Role) -> User {
        self.users.insert(user(id, role)).expect("Failed to insert test user")
    }

    pub fn add_event(&self, event: Event) -> EventId {
        self.events.insert(event).expect("Failed to insert test event").id
    }

    pub fn ctx(&self, id: &str) -> AuthContext {
        AuthContext::from(&self.users.get(&UserId::from(id)).expect("Unknown test user"))
    }
}
