//! Data models module
//!
//! This module contains all data structures used throughout the crate

pub mod user;
pub mod event;
pub mod registration;

// Re-export commonly used models
pub use user::{User, UserId, Role, CreateUserRequest};
pub use event::{Event, EventId, EventCategory, EventStatus, Organizer, CreateEventRequest, UpdateEventRequest};
pub use registration::Registration;
