//! Helper functions and utilities
//!
//! Formatting helpers shared by event cards and dashboards.

use chrono::{DateTime, Utc};
use crate::models::event::Event;

/// First letter of each whitespace-separated word, upper-cased
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Card date, e.g. "Dec 15, 2024"
pub fn format_event_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// Card time range, e.g. "9:00 AM - 5:00 PM"
pub fn format_event_time(event: &Event) -> String {
    let start = event.starts_at.format("%-I:%M %p").to_string();
    match event.ends_at {
        Some(ends_at) => format!("{} - {}", start, ends_at.format("%-I:%M %p")),
        None => start,
    }
}

/// Capacity line, e.g. "180/200 registered"
pub fn capacity_label(event: &Event) -> String {
    format!("{}/{} registered", event.registrations, event.max_capacity)
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
