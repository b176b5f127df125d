//! State management module
//!
//! This module handles per-session UI state

pub mod session;

pub use session::{AuthMode, UiSession};
