//! User service implementation
//!
//! Lookup is open to everyone; listing and adding users is an admin task.

use tracing::debug;
use crate::models::user::{CreateUserRequest, User, UserId};
use crate::services::auth::{AuthContext, AuthService, Operation};
use crate::store::UserStore;
use crate::utils::errors::{CampusError, Result};
use crate::utils::logging;

/// User service for managing user operations
#[derive(Clone)]
pub struct UserService {
    users: UserStore,
    auth: AuthService,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(users: UserStore, auth: AuthService) -> Self {
        Self { users, auth }
    }

    /// Get user by ID
    pub fn get_user(&self, user_id: &UserId) -> Result<User> {
        debug!(user_id = %user_id, "Getting user by ID");
        self.users.get(user_id)
    }

    /// Session context for an existing user
    pub fn auth_context(&self, user_id: &UserId) -> Result<AuthContext> {
        Ok(AuthContext::from(&self.users.get(user_id)?))
    }

    /// List all users (admin only)
    pub fn list_users(&self, ctx: &AuthContext) -> Result<Vec<User>> {
        self.auth.authorize(ctx, Operation::ManageUsers, None)?;
        Ok(self.users.list())
    }

    /// Add a user to the directory (admin only)
    pub fn add_user(&self, ctx: &AuthContext, request: CreateUserRequest) -> Result<User> {
        self.auth.authorize(ctx, Operation::ManageUsers, None)?;

        if !request.email.contains('@') {
            return Err(CampusError::InvalidInput(format!("Invalid email address: {}", request.email)));
        }

        let user = self.users.insert(User {
            id: request.id.unwrap_or_else(|| UserId::new(uuid::Uuid::new_v4().to_string())),
            name: request.name,
            email: request.email,
            role: request.role,
            avatar: request.avatar,
        })?;

        logging::log_admin_action(&ctx.user_id, "add_user", Some(user.id.as_str()));
        Ok(user)
    }
}
