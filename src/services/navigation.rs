//! Role-specific navigation and dashboard copy

use serde::Serialize;
use crate::models::user::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub title: &'static str,
    pub path: &'static str,
}

const fn item(title: &'static str, path: &'static str) -> MenuItem {
    MenuItem { title, path }
}

const STUDENT_MENU: &[MenuItem] = &[
    item("Dashboard", "/dashboard"),
    item("Browse Events", "/events"),
    item("My Events", "/my-events"),
    item("Notifications", "/notifications"),
];

const ORGANIZER_MENU: &[MenuItem] = &[
    item("Dashboard", "/dashboard"),
    item("My Events", "/my-events"),
    item("Create Event", "/create-event"),
    item("Analytics", "/analytics"),
    item("Notifications", "/notifications"),
];

const ADMIN_MENU: &[MenuItem] = &[
    item("Dashboard", "/dashboard"),
    item("All Events", "/all-events"),
    item("Users", "/users"),
    item("Analytics", "/analytics"),
    item("Settings", "/settings"),
];

impl Role {
    /// Sidebar entries, top to bottom
    pub fn menu(self) -> &'static [MenuItem] {
        match self {
            Role::Student => STUDENT_MENU,
            Role::Organizer => ORGANIZER_MENU,
            Role::Admin => ADMIN_MENU,
        }
    }

    pub fn dashboard_title(self) -> &'static str {
        match self {
            Role::Student => "Student Dashboard",
            Role::Organizer => "Organizer Dashboard",
            Role::Admin => "Admin Dashboard",
        }
    }

    pub fn dashboard_subtitle(self) -> &'static str {
        match self {
            Role::Student => "Discover and register for exciting campus events",
            Role::Organizer => "Manage your events and track registrations",
            Role::Admin => "Oversee all campus events and user activities",
        }
    }

    pub fn quick_actions(self) -> &'static [&'static str] {
        match self {
            Role::Student => &["Browse Events", "My Registrations", "Notifications"],
            Role::Organizer => &["Create Event", "Manage Registrations", "View Analytics"],
            Role::Admin => &["Manage Users", "Approve Events", "System Analytics"],
        }
    }

    /// Heading of the featured events panel
    pub fn featured_heading(self) -> &'static str {
        match self {
            Role::Student => "Recommended Events",
            Role::Organizer | Role::Admin => "Recent Events",
        }
    }

    /// Organizers and admins get a "Create Event" button in the header
    pub fn can_create_events(self) -> bool {
        match self {
            Role::Student => false,
            Role::Organizer | Role::Admin => true,
        }
    }
}
