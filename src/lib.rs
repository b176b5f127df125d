//! Campus Events
//!
//! Domain core for a campus event-management application: an in-memory
//! event store, the registration rules that guard it, role-based
//! authorization, and the read-only queries behind the role dashboards.

pub mod config;
pub mod services;
pub mod models;
pub mod store;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CampusError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use store::{EventStore, UserStore, SeedData};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
