//! Error handling for campus events
//!
//! This module defines the main error type used throughout the crate
//! and provides a unified error handling strategy. Every business rule
//! violation is reported as a typed variant; nothing here is fatal.

use thiserror::Error;
use crate::models::event::{EventId, EventStatus};
use crate::models::user::{Role, UserId};
use crate::services::auth::Operation;

/// Main error type for the campus events crate
#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: EventId },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: UserId },

    #[error("Event {event_id} is full ({capacity} places taken)")]
    EventFull { event_id: EventId, capacity: u32 },

    #[error("Event {event_id} is {status}, registration is closed")]
    EventNotUpcoming { event_id: EventId, status: EventStatus },

    #[error("User {user_id} is already registered for event {event_id}")]
    AlreadyRegistered { user_id: UserId, event_id: EventId },

    #[error("User {user_id} is not registered for event {event_id}")]
    NotRegistered { user_id: UserId, event_id: EventId },

    #[error("Role {role} may not perform {operation}")]
    Forbidden { role: Role, operation: Operation },

    #[error("Event {event_id} capacity {capacity} cannot hold {requested} registrations")]
    CapacityExceeded { event_id: EventId, capacity: u32, requested: i64 },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: EventStatus, to: EventStatus },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for campus event operations
pub type Result<T> = std::result::Result<T, CampusError>;

impl CampusError {
    /// Either the event or the user referenced by the caller does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CampusError::EventNotFound { .. } | CampusError::UserNotFound { .. }
        )
    }

    /// Check if the error is recoverable
    ///
    /// Business rule violations are recoverable: the caller can retry once
    /// the world changes (a place frees up, the user picks another event).
    pub fn is_recoverable(&self) -> bool {
        match self {
            CampusError::EventNotFound { .. } => false,
            CampusError::UserNotFound { .. } => false,
            CampusError::EventFull { .. } => true,
            CampusError::EventNotUpcoming { .. } => false,
            CampusError::AlreadyRegistered { .. } => true,
            CampusError::NotRegistered { .. } => true,
            CampusError::Forbidden { .. } => false,
            CampusError::CapacityExceeded { .. } => false,
            CampusError::InvalidState(_) => false,
            CampusError::InvalidStateTransition { .. } => false,
            CampusError::InvalidInput(_) => true,
            CampusError::Config(_) => false,
            CampusError::ConfigLoad(_) => false,
            CampusError::Serialization(_) => false,
            CampusError::Toml(_) => false,
            CampusError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CampusError::CapacityExceeded { .. } => ErrorSeverity::Critical,
            CampusError::InvalidState(_) => ErrorSeverity::Critical,
            CampusError::Config(_) => ErrorSeverity::Critical,
            CampusError::ConfigLoad(_) => ErrorSeverity::Critical,
            CampusError::Forbidden { .. } => ErrorSeverity::Warning,
            CampusError::EventFull { .. } => ErrorSeverity::Info,
            CampusError::EventNotUpcoming { .. } => ErrorSeverity::Info,
            CampusError::AlreadyRegistered { .. } => ErrorSeverity::Info,
            CampusError::NotRegistered { .. } => ErrorSeverity::Info,
            CampusError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
