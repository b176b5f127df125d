//! Per-session UI state
//!
//! Plain owned state for one browser session: whether the sidebar is
//! collapsed and which form the auth page shows.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Which form the authentication page is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
    ForgotPassword,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Signup => "Create Account",
            AuthMode::ForgotPassword => "Reset Password",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSession {
    pub sidebar_collapsed: bool,
    pub auth_mode: AuthMode,
    /// When this session was last touched
    pub updated_at: DateTime<Utc>,
}

impl Default for UiSession {
    fn default() -> Self {
        Self::new()
    }
}

impl UiSession {
    pub fn new() -> Self {
        Self {
            sidebar_collapsed: false,
            auth_mode: AuthMode::Login,
            updated_at: Utc::now(),
        }
    }

    /// Flip the sidebar and return the new collapsed flag
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.updated_at = Utc::now();
        self.sidebar_collapsed
    }

    pub fn set_auth_mode(&mut self, mode: AuthMode) {
        self.auth_mode = mode;
        self.updated_at = Utc::now();
    }
}
