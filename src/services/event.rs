//! Event management service
//!
//! Organizer-driven edits: creating events, changing details, capacity and
//! lifecycle status. Registration counts are never touched here.

use chrono::Utc;
use tracing::info;
use crate::models::event::{CreateEventRequest, Event, EventId, EventStatus, UpdateEventRequest};
use crate::services::auth::{AuthContext, AuthService, Operation};
use crate::store::EventStore;
use crate::utils::errors::{CampusError, Result};
use crate::utils::logging;

#[derive(Clone)]
pub struct EventService {
    events: EventStore,
    auth: AuthService,
}

impl EventService {
    pub fn new(events: EventStore, auth: AuthService) -> Self {
        Self { events, auth }
    }

    /// Create a new event owned by `request.organizer`
    pub fn create_event(&self, ctx: &AuthContext, request: CreateEventRequest) -> Result<Event> {
        self.auth
            .authorize(ctx, Operation::CreateEvent, Some(&request.organizer.user_id))?;

        if request.title.trim().is_empty() {
            return Err(CampusError::InvalidInput("Event title is required".to_string()));
        }
        if request.venue.trim().is_empty() {
            return Err(CampusError::InvalidInput("Event venue is required".to_string()));
        }
        if request.max_capacity == 0 {
            return Err(CampusError::InvalidInput("Event capacity must be greater than 0".to_string()));
        }
        if matches!(request.ends_at, Some(ends_at) if ends_at < request.starts_at) {
            return Err(CampusError::InvalidInput("Event cannot end before it starts".to_string()));
        }

        let event = self.events.insert(Event {
            id: EventId::generate(),
            title: request.title,
            description: request.description,
            starts_at: request.starts_at,
            ends_at: request.ends_at,
            venue: request.venue,
            category: request.category,
            organizer: request.organizer,
            max_capacity: request.max_capacity,
            registrations: 0,
            status: EventStatus::Upcoming,
            poster: request.poster,
        })?;

        logging::log_event_action(&event.id, "create", &ctx.user_id, Some(&event.title));
        Ok(event)
    }

    /// Apply an edit. Either every requested change lands or none does.
    pub fn update_event(&self, ctx: &AuthContext, event_id: &EventId, request: UpdateEventRequest) -> Result<Event> {
        let current = self.events.get(event_id)?;
        self.auth
            .authorize(ctx, Operation::EditEvent, Some(&current.organizer.user_id))?;

        if request.is_empty() {
            return Ok(current);
        }

        let event = self.events.update(event_id, |record| {
            let event = &mut record.event;

            if let Some(title) = request.title {
                if title.trim().is_empty() {
                    return Err(CampusError::InvalidInput("Event title is required".to_string()));
                }
                event.title = title;
            }
            if let Some(description) = request.description {
                event.description = description;
            }
            if let Some(starts_at) = request.starts_at {
                event.starts_at = starts_at;
            }
            if let Some(venue) = request.venue {
                if venue.trim().is_empty() {
                    return Err(CampusError::InvalidInput("Event venue is required".to_string()));
                }
                event.venue = venue;
            }
            if let Some(category) = request.category {
                event.category = category;
            }
            if let Some(poster) = request.poster {
                event.poster = Some(poster);
            }
            if let Some(max_capacity) = request.max_capacity {
                if max_capacity == 0 {
                    return Err(CampusError::InvalidInput("Event capacity must be greater than 0".to_string()));
                }
                if max_capacity < event.registrations {
                    return Err(CampusError::CapacityExceeded {
                        event_id: event.id.clone(),
                        capacity: max_capacity,
                        requested: i64::from(event.registrations),
                    });
                }
                event.max_capacity = max_capacity;
            }
            if let Some(status) = request.status {
                if !event.status.can_transition_to(status) {
                    return Err(CampusError::InvalidStateTransition {
                        from: event.status,
                        to: status,
                    });
                }
                event.status = status;
            }
            if matches!(event.ends_at, Some(ends_at) if ends_at < event.starts_at) {
                return Err(CampusError::InvalidInput("Event cannot end before it starts".to_string()));
            }

            Ok(event.clone())
        })?;

        logging::log_event_action(event_id, "update", &ctx.user_id, None);
        Ok(event)
    }

    /// Cancel an event. Registrations are kept as a historical record.
    pub fn cancel_event(&self, ctx: &AuthContext, event_id: &EventId) -> Result<Event> {
        let request = UpdateEventRequest {
            status: Some(EventStatus::Cancelled),
            ..Default::default()
        };
        let event = self.update_event(ctx, event_id, request)?;
        info!(event_id = %event_id, user_id = %ctx.user_id, cancelled_at = %Utc::now(), "Event cancelled");
        Ok(event)
    }

    pub fn get_event(&self, event_id: &EventId) -> Result<Event> {
        self.events.get(event_id)
    }

    pub fn list_events(&self) -> Vec<Event> {
        self.events.list()
    }
}
