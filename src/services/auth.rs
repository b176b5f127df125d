//! Role authorization gate
//!
//! Maps a (role, operation, resource owner) triple to allow or deny. The
//! decision never looks at event state; that is the registration service's
//! job. Roles are a closed enum, so adding one forces every match below to
//! be revisited.

use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::models::user::{Role, User, UserId};
use crate::utils::errors::{CampusError, Result};
use crate::utils::logging;

/// Operations subject to role checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Register,
    Unregister,
    CreateEvent,
    EditEvent,
    ViewAnalytics,
    ManageUsers,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Register => "register",
            Operation::Unregister => "unregister",
            Operation::CreateEvent => "create_event",
            Operation::EditEvent => "edit_event",
            Operation::ViewAnalytics => "view_analytics",
            Operation::ManageUsers => "manage_users",
        };
        f.write_str(name)
    }
}

/// Who is acting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: UserId,
    pub role: Role,
}

impl AuthContext {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    fn owns(&self, resource_owner: Option<&UserId>) -> bool {
        resource_owner == Some(&self.user_id)
    }
}

impl From<&User> for AuthContext {
    fn from(user: &User) -> Self {
        Self::new(user.id.clone(), user.role)
    }
}

/// Authorization service for role-based access control
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    /// Decide without side effects.
    ///
    /// `resource_owner` is the organizer of the event the operation targets.
    /// Organizers are confined to their own events; an operation without an
    /// owner (system-wide analytics, for example) is outside their scope.
    pub fn is_allowed(&self, ctx: &AuthContext, operation: Operation, resource_owner: Option<&UserId>) -> bool {
        match ctx.role {
            Role::Student => matches!(operation, Operation::Register | Operation::Unregister),
            Role::Organizer => match operation {
                Operation::Register | Operation::Unregister | Operation::ManageUsers => false,
                Operation::CreateEvent | Operation::EditEvent | Operation::ViewAnalytics => {
                    ctx.owns(resource_owner)
                }
            },
            Role::Admin => match operation {
                Operation::Register | Operation::Unregister => false,
                Operation::CreateEvent
                | Operation::EditEvent
                | Operation::ViewAnalytics
                | Operation::ManageUsers => true,
            },
        }
    }

    /// Allow or fail with `Forbidden`
    pub fn authorize(&self, ctx: &AuthContext, operation: Operation, resource_owner: Option<&UserId>) -> Result<()> {
        if self.is_allowed(ctx, operation, resource_owner) {
            debug!(user_id = %ctx.user_id, role = %ctx.role, operation = %operation, "Authorization granted");
            Ok(())
        } else {
            logging::log_authorization_denied(&ctx.user_id, ctx.role, operation);
            Err(CampusError::Forbidden {
                role: ctx.role,
                operation,
            })
        }
    }
}
