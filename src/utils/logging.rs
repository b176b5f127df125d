//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for campus event operations.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::models::event::EventId;
use crate::models::user::{Role, UserId};
use crate::services::auth::Operation;
use crate::utils::errors::{CampusError, Result};

/// Initialize logging based on configuration.
///
/// When a log directory is configured the returned guard must be kept alive
/// for as long as file output is wanted; dropping it flushes the writer.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| CampusError::Config(format!("Invalid log filter {}: {}", config.level, e)))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, &config.file_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| CampusError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a successful registration change
pub fn log_registration_action(user_id: &UserId, event_id: &EventId, action: &str, registrations: u32) {
    info!(
        user_id = %user_id,
        event_id = %event_id,
        action = action,
        registrations = registrations,
        "Registration action performed"
    );
}

/// Log a rejected authorization check
pub fn log_authorization_denied(user_id: &UserId, role: Role, operation: Operation) {
    warn!(
        user_id = %user_id,
        role = %role,
        operation = %operation,
        "Authorization denied"
    );
}

/// Log event management actions
pub fn log_event_action(event_id: &EventId, action: &str, user_id: &UserId, details: Option<&str>) {
    info!(
        event_id = %event_id,
        action = action,
        user_id = %user_id,
        details = details,
        "Event action performed"
    );
}

/// Log admin actions
pub fn log_admin_action(admin_id: &UserId, action: &str, target: Option<&str>) {
    warn!(
        admin_id = %admin_id,
        action = action,
        target = target,
        "Admin action performed"
    );
}

/// Log dashboard figures
pub fn log_dashboard_metric(role: Role, metric: &str, value: &str) {
    debug!(
        role = %role,
        metric = metric,
        value = value,
        "Dashboard metric computed"
    );
}
