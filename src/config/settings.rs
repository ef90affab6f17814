//! Gym settings loading from config.toml
//!
//! Holds the deployment-level knobs that are not per-row data: the gym's
//! display name, the local clock offset for "today" in date derivations, and
//! the optional admin identity seeded on first run.

use crate::errors::{Error, Result};
use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;
use std::path::Path;

/// The admin profile seeded on first run, if configured.
#[derive(Debug, Deserialize, Clone)]
pub struct AdminSeed {
    /// Authentication identity of the owner account
    pub user_id: String,
    /// Display name for the seeded profile
    pub full_name: String,
}

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone)]
pub struct GymSettings {
    /// Display name used in logs and reports
    pub gym_name: String,
    /// Hours east of UTC; the gym's wall clock drives date derivations
    #[serde(default)]
    pub timezone_offset_hours: i64,
    /// Days ahead a membership counts as expiring soon
    #[serde(default = "default_expiry_window")]
    pub expiry_window_days: u64,
    /// Admin profile to seed on first run
    pub admin: Option<AdminSeed>,
}

const fn default_expiry_window() -> u64 {
    30
}

impl GymSettings {
    /// The current date on the gym's wall clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        (Utc::now() + Duration::hours(self.timezone_offset_hours)).date_naive()
    }
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<GymSettings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from the default location (./config.toml).
pub fn load_default_settings() -> Result<GymSettings> {
    load_settings("config.toml")
}
