//! Settings struct with TOML-based sections.

use serde::{Deserialize, Serialize};

use crate::models::PageSizeChoice;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Scale form defaults.
    #[serde(default)]
    pub scale: ScaleSettings,
}

/// Path configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Folder the cpdf binary is downloaded into.
    #[serde(default = "default_tools_folder")]
    pub tools_folder: String,
}

fn default_tools_folder() -> String {
    ".".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            tools_folder: default_tools_folder(),
        }
    }
}

/// Defaults applied to the scale form when the window opens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScaleSettings {
    /// Page size preselected in the dropdown.
    #[serde(default)]
    pub default_page_size: PageSizeChoice,
}
