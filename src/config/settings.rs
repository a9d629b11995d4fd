use anyhow::Result;
use directories::ProjectDirs;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::AppConfig;
use crate::core::CoreError;

const APP_NAME: &str = "SiliconInfo";
const CONFIG_FILE: &str = "config.json";

/// Returns the platform-specific configuration directory for the application.
pub fn get_config_directory() -> Option<PathBuf> {
    ProjectDirs::from("com", "siliconinfo", APP_NAME)
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

/// Returns the full path to the configuration file.
pub fn get_config_file_path() -> Option<PathBuf> {
    get_config_directory().map(|dir| dir.join(CONFIG_FILE))
}

/// Reads and parses a config file, failing on any I/O or parse error.
pub fn read_config(path: &Path) -> Result<AppConfig, CoreError> {
    let content =
        fs::read_to_string(path).map_err(|e| CoreError::Io(e, path.to_path_buf()))?;
    serde_json::from_str(&content).map_err(|e| CoreError::Config(e, path.to_path_buf()))
}

/// Loads the application configuration.
///
/// `path` overrides the platform config location. The file is optional and
/// never written: a missing file yields the defaults, and an unreadable or
/// corrupted one logs a warning and falls back to the defaults as well.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => get_config_file_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?,
    };

    match read_config(&config_path) {
        Ok(config) => {
            tracing::info!("Loaded config from {:?}", config_path);
            Ok(config)
        }
        Err(CoreError::Io(e, _)) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No config file at {:?}, using defaults", config_path);
            Ok(AppConfig::default())
        }
        Err(e) => {
            tracing::warn!("{}. Falling back to default config.", e);
            Ok(AppConfig::default())
        }
    }
}

// Platform-specific configuration paths for reference:
// macOS:   ~/Library/Application Support/com.siliconinfo.SiliconInfo/
// Linux:   ~/.config/siliconinfo/
