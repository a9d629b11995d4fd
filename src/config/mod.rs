pub mod settings;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Presentation settings. Every field has a default, so a partial
/// `config.json` only overrides what it names.
///
/// Indicator assets are fixed per classification and cannot be configured.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Point size of the status bar indicator.
    pub indicator_size: f64,
    /// Point size of the application icon in the status menu.
    pub app_icon_size: f64,
    pub quit_title: String,
}

impl AppConfig {
    /// Loads the config from the platform config directory.
    pub fn load() -> Result<Self> {
        settings::load_config(None)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            indicator_size: 18.0,
            app_icon_size: 32.0,
            quit_title: "Quit Silicon Info".to_string(),
        }
    }
}
