//! Registration model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::models::event::EventId;
use crate::models::user::UserId;

/// A user holding a reserved place in an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub user_id: UserId,
    pub event_id: EventId,
    pub registered_at: DateTime<Utc>,
}

impl Registration {
    pub fn new(user_id: UserId, event_id: EventId) -> Self {
        Self {
            user_id,
            event_id,
            registered_at: Utc::now(),
        }
    }
}
