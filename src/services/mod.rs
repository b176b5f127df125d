//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod dashboard;
pub mod event;
pub mod navigation;
pub mod registration;
pub mod user;

// Re-export commonly used services
pub use auth::{AuthService, AuthContext, Operation};
pub use dashboard::{DashboardService, DashboardSnapshot, StatCard, StatKind, StatValue, StatusCounts, RegistrationTotals, Trend, TrendDirection, CardAction, EventAnalytics};
pub use event::EventService;
pub use navigation::MenuItem;
pub use registration::RegistrationService;
pub use user::UserService;

use crate::config::settings::Settings;
use crate::store::{EventStore, UserStore};

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub registration_service: RegistrationService,
    pub event_service: EventService,
    pub user_service: UserService,
    pub dashboard_service: DashboardService,
    pub auth_service: AuthService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing the same stores
    pub fn new(settings: &Settings, events: EventStore, users: UserStore) -> Self {
        let auth_service = AuthService::new();
        let registration_service = RegistrationService::new(
            events.clone(),
            users.clone(),
            auth_service,
            settings.registration.clone(),
        );
        let event_service = EventService::new(events.clone(), auth_service);
        let user_service = UserService::new(users.clone(), auth_service);
        let dashboard_service = DashboardService::new(events, users, auth_service);

        Self {
            registration_service,
            event_service,
            user_service,
            dashboard_service,
            auth_service,
        }
    }
}
