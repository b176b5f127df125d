//! User model

use std::fmt;
use serde::{Deserialize, Serialize};

/// Opaque user identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of roles a user can hold for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Organizer,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Student => "student",
            Role::Organizer => "organizer",
            Role::Admin => "admin",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Avatar fallback text: first letter of every name part, upper-cased
    pub fn initials(&self) -> String {
        crate::utils::helpers::initials(&self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let user = User {
            id: UserId::from("u1"),
            name: "John Doe".to_string(),
            email: "john@university.edu".to_string(),
            role: Role::Student,
            avatar: None,
        };
        assert_eq!(user.initials(), "JD");
    }

    #[test]
    fn test_role_round_trips_through_lowercase_names() {
        let role: Role = serde_json::from_str("\"organizer\"").unwrap();
        assert_eq!(role, Role::Organizer);
        assert_eq!(role.to_string(), "organizer");
    }
}
