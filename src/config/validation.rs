//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use std::path::Path;
use crate::utils::errors::{CampusError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_dashboard_config(&settings.dashboard)?;
    validate_seed_config(&settings.seed)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate dashboard configuration
fn validate_dashboard_config(config: &super::DashboardConfig) -> Result<()> {
    if config.recommended_limit == 0 {
        return Err(CampusError::Config(
            "Recommended events limit must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate seed configuration
fn validate_seed_config(config: &super::SeedConfig) -> Result<()> {
    if let Some(path) = config.seed_path() {
        match Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some("json") | Some("toml") => {}
            _ => {
                return Err(CampusError::Config(
                    format!("Seed file must be .json or .toml: {}", path)
                ));
            }
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CampusError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(CampusError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.file_prefix.is_empty() {
        return Err(CampusError::Config(
            "Log file prefix is required".to_string()
        ));
    }

    Ok(())
}

impl super::SeedConfig {
    /// Configured seed path, ignoring blank values from the environment
    pub fn seed_path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.trim().is_empty())
    }
}
