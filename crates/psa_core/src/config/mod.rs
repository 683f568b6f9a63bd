//! Configuration management for PDF Size Adjuster.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Defaults applied for missing fields on load
//!
//! # Example
//!
//! ```no_run
//! use psa_core::config::ConfigManager;
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/settings.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! println!("Tools folder: {}", config.settings().paths.tools_folder);
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{PathSettings, ScaleSettings, Settings};
