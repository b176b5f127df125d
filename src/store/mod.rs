//! In-memory storage module
//!
//! This module owns all mutable domain state: events, the registration
//! relation, and the user directory.

pub mod event;
pub mod user;
pub mod seed;

pub use event::{EventStore, EventRecord};
pub use user::UserStore;
pub use seed::{SeedData, SeedRegistration, load_seed};
