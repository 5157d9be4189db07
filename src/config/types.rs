//! Configuration types for the hours tracker.
//!
//! This module contains the strongly-typed structures deserialized from
//! `tracker.yaml`. Every section is optional and falls back to defaults.

use std::path::PathBuf;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer};

use crate::calculation::parse_time_text;
use crate::models::TargetPolicy;

/// Where the worksheet lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Directory holding the worksheet. Relative paths are resolved
    /// against the configuration directory.
    pub directory: PathBuf,
    /// Worksheet name; the file is `<worksheet>.csv`.
    pub worksheet: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data"),
            worksheet: "Sheet1".to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Pre-filled values of the entry form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Default clock-in time.
    #[serde(deserialize_with = "deserialize_time_text")]
    pub default_start: NaiveTime,
    /// Default clock-out time.
    #[serde(deserialize_with = "deserialize_time_text")]
    pub default_end: NaiveTime,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_start: NaiveTime::from_hms_opt(6, 30, 0).unwrap_or_default(),
            default_end: NaiveTime::from_hms_opt(15, 30, 0).unwrap_or_default(),
        }
    }
}

/// Reads a time with the same rules as the entry form.
fn deserialize_time_text<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_time_text(&text).map_err(serde::de::Error::custom)
}

/// The complete contents of `tracker.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Worksheet location.
    pub sheet: SheetConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Target-hours policy.
    pub policy: TargetPolicy,
    /// Entry form defaults.
    pub form: FormConfig,
}
