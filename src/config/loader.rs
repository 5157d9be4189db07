//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tracker
//! configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};
use crate::models::TargetPolicy;
use crate::store::CsvSheetStore;

use super::types::{FormConfig, ServerConfig, SheetConfig, TrackerConfig};

/// File name of the configuration inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "tracker.yaml";

/// Loads and provides access to the tracker configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── tracker.yaml   # policy, sheet, server and form settings
/// └── data/
///     └── Sheet1.csv # the worksheet (default location)
/// ```
///
/// # Example
///
/// ```no_run
/// use hours_tracker::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Worksheet: {}", loader.sheet_path().display());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TrackerConfig,
    root: PathBuf,
}

impl ConfigLoader {
    /// Loads configuration from `tracker.yaml` in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `tracker.yaml` is missing
    /// - `tracker.yaml` contains invalid YAML or invalid values
    pub fn load<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let root = path.as_ref().to_path_buf();
        let config = Self::load_yaml::<TrackerConfig>(&root.join(CONFIG_FILE_NAME))?;
        Ok(Self { config, root })
    }

    /// Wraps an in-memory configuration. Relative paths resolve against the
    /// current directory.
    pub fn from_config(config: TrackerConfig) -> Self {
        Self {
            config,
            root: PathBuf::from("."),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> TrackerResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TrackerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| TrackerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Returns the target-hours policy.
    pub fn policy(&self) -> &TargetPolicy {
        &self.config.policy
    }

    /// Returns the worksheet settings.
    pub fn sheet(&self) -> &SheetConfig {
        &self.config.sheet
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the entry form defaults.
    pub fn form(&self) -> &FormConfig {
        &self.config.form
    }

    /// The worksheet directory, resolved against the configuration directory.
    pub fn sheet_directory(&self) -> PathBuf {
        let directory = &self.config.sheet.directory;
        if directory.is_absolute() {
            directory.clone()
        } else {
            self.root.join(directory)
        }
    }

    /// The worksheet file path.
    pub fn sheet_path(&self) -> PathBuf {
        self.sheet_store().path().to_path_buf()
    }

    /// Builds the CSV store for the configured worksheet.
    pub fn sheet_store(&self) -> CsvSheetStore {
        CsvSheetStore::new(self.sheet_directory(), &self.config.sheet.worksheet)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(TrackerConfig::default())
    }
}
