//! Registration service implementation
//!
//! This service handles the register/unregister use case: it resolves the
//! acting user, asks the authorization gate, then checks and mutates the
//! event record in a single store update so a failed precondition leaves
//! no trace.

use tracing::debug;
use crate::config::RegistrationConfig;
use crate::models::event::{Event, EventId, EventStatus};
use crate::models::registration::Registration;
use crate::models::user::UserId;
use crate::services::auth::{AuthContext, AuthService, Operation};
use crate::store::{EventStore, UserStore};
use crate::utils::errors::{CampusError, Result};
use crate::utils::logging;

/// Registration service for event sign-ups
#[derive(Clone)]
pub struct RegistrationService {
    events: EventStore,
    users: UserStore,
    auth: AuthService,
    config: RegistrationConfig,
}

impl RegistrationService {
    /// Create a new RegistrationService instance
    pub fn new(events: EventStore, users: UserStore, auth: AuthService, config: RegistrationConfig) -> Self {
        Self {
            events,
            users,
            auth,
            config,
        }
    }

    /// Reserve a place for `user_id` in `event_id`.
    ///
    /// Checks run in a fixed order and the first failure wins: event exists,
    /// event is upcoming, event has room, user is not yet registered.
    pub fn register(&self, user_id: &UserId, event_id: &EventId) -> Result<Event> {
        self.authorize(user_id, Operation::Register)?;

        let result = self.events.update(event_id, |record| {
            if record.event.status != EventStatus::Upcoming {
                return Err(CampusError::EventNotUpcoming {
                    event_id: event_id.clone(),
                    status: record.event.status,
                });
            }
            if record.event.is_full() {
                return Err(CampusError::EventFull {
                    event_id: event_id.clone(),
                    capacity: record.event.max_capacity,
                });
            }
            if record.is_registered(user_id) {
                return Err(CampusError::AlreadyRegistered {
                    user_id: user_id.clone(),
                    event_id: event_id.clone(),
                });
            }

            record.apply_delta(1)?;
            record.add_registration(user_id.clone())?;
            Ok(record.event.clone())
        });

        match result {
            Ok(event) => {
                logging::log_registration_action(user_id, event_id, "register", event.registrations);
                Ok(event)
            }
            Err(e) => {
                debug!(user_id = %user_id, event_id = %event_id, error = %e, "Registration rejected");
                Err(e)
            }
        }
    }

    /// Give up a place previously reserved with [`register`](Self::register).
    ///
    /// Unregistering twice fails with `NotRegistered` on the second call
    /// unless `idempotent_unregister` is configured, in which case the
    /// second call returns the unchanged event.
    pub fn unregister(&self, user_id: &UserId, event_id: &EventId) -> Result<Event> {
        self.authorize(user_id, Operation::Unregister)?;
        let idempotent = self.config.idempotent_unregister;

        let result = self.events.update(event_id, |record| {
            if !record.is_registered(user_id) {
                if idempotent {
                    return Ok((record.event.clone(), false));
                }
                return Err(CampusError::NotRegistered {
                    user_id: user_id.clone(),
                    event_id: event_id.clone(),
                });
            }
            if record.event.status != EventStatus::Upcoming {
                return Err(CampusError::EventNotUpcoming {
                    event_id: event_id.clone(),
                    status: record.event.status,
                });
            }

            record.remove_registration(user_id)?;
            record.apply_delta(-1)?;
            Ok((record.event.clone(), true))
        });

        match result {
            Ok((event, true)) => {
                logging::log_registration_action(user_id, event_id, "unregister", event.registrations);
                Ok(event)
            }
            Ok((event, false)) => {
                debug!(user_id = %user_id, event_id = %event_id, "Unregister without registration ignored");
                Ok(event)
            }
            Err(e) => {
                debug!(user_id = %user_id, event_id = %event_id, error = %e, "Unregistration rejected");
                Err(e)
            }
        }
    }

    /// Check if user is registered for event
    pub fn is_registered(&self, user_id: &UserId, event_id: &EventId) -> Result<bool> {
        Ok(self.events.record(event_id)?.is_registered(user_id))
    }

    /// Get events user is registered for
    pub fn registrations_for_user(&self, user_id: &UserId) -> Result<Vec<Event>> {
        self.users.get(user_id)?;
        Ok(self.events.registered_events(user_id))
    }

    /// Get event participants in registration order
    pub fn participants(&self, event_id: &EventId) -> Result<Vec<Registration>> {
        Ok(self.events.record(event_id)?.registrations().to_vec())
    }

    fn authorize(&self, user_id: &UserId, operation: Operation) -> Result<AuthContext> {
        let user = self.users.get(user_id)?;
        let ctx = AuthContext::from(&user);
        self.auth.authorize(&ctx, operation, None)?;
        debug!(user_id = %user_id, operation = %operation, "Registration request authorized");
        Ok(ctx)
    }
}
