//! User directory

use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;
use crate::models::user::{User, UserId};
use crate::utils::errors::{CampusError, Result};

/// In-memory user directory. Roles never change once a user is stored.
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new user
    pub fn insert(&self, user: User) -> Result<User> {
        if user.name.trim().is_empty() {
            return Err(CampusError::InvalidInput(format!("user {} has an empty name", user.id)));
        }

        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        if users.iter().any(|u| u.id == user.id) {
            return Err(CampusError::InvalidInput(format!("user {} already exists", user.id)));
        }
        users.push(user.clone());

        debug!(user_id = %user.id, role = %user.role, "User added to directory");
        Ok(user)
    }

    /// Find user by ID
    pub fn get(&self, user_id: &UserId) -> Result<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|u| &u.id == user_id)
            .cloned()
            .ok_or_else(|| CampusError::UserNotFound { user_id: user_id.clone() })
    }

    /// All users in insertion order
    pub fn list(&self) -> Vec<User> {
        self.users.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn count(&self) -> usize {
        self.users.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
