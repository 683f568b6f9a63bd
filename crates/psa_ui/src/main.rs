//! PDF Size Adjuster - Main entry point
//!
//! This is the application entry point using iced. It handles:
//! - Application-level logging initialization
//! - Configuration loading
//! - Application launch

use std::path::PathBuf;

use iced::{Size, Task};

use psa_core::config::ConfigManager;
use psa_core::logging::{init_tracing, LogLevel};

mod app;
mod components;
mod handlers;

use app::App;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

pub fn main() -> iced::Result {
    // Load configuration first
    let config_path = default_config_path();
    let mut config = ConfigManager::new(&config_path);

    if let Err(e) = config.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    // Initialize application-level logging
    init_tracing(LogLevel::Info);

    tracing::info!("PDF Size Adjuster starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", psa_core::version());

    let settings = config.settings().clone();

    iced::application(
        move || (App::new(settings.clone()), Task::none()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .window_size(Size::new(620.0, 460.0))
    .run()
}
