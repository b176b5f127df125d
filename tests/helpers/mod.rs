//! Test helpers module
//!
//! This module provides utilities and helpers for testing the campus events
//! crate: a ready-wired test campus and builders for users and events.

#![allow(dead_code)]

pub mod test_context;
pub mod test_data;

pub use test_context::*;
pub use test_data::*;
