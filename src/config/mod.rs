//! Configuration loading and management for the hours tracker.
//!
//! This module loads `tracker.yaml`: the target-hours policy, the worksheet
//! location, the server bind address and the entry form defaults.
//!
//! # Example
//!
//! ```no_run
//! use hours_tracker::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Week starts on {:?}", config.policy().week_start);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{FormConfig, ServerConfig, SheetConfig, TrackerConfig};
