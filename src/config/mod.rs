//! Configuration module for Influencer Finder
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_VAR: &str = "INFLUENCER_FINDER_SETTINGS_PATH";

/// Settings together with the file they were read from, if any
pub struct LoadedSettings {
    pub settings: Settings,
    pub path: Option<PathBuf>,
}

/// Load settings from the first file found, or use defaults.
///
/// Search order: `$INFLUENCER_FINDER_SETTINGS_PATH`, `settings.yml`,
/// `config/settings.yml`, `<config dir>/influencer-finder/settings.yml`.
/// Environment overrides are applied last.
pub fn load() -> Result<LoadedSettings> {
    let mut candidates = Vec::new();
    if let Ok(path) = std::env::var(SETTINGS_PATH_VAR) {
        candidates.push(PathBuf::from(path));
    }
    candidates.push(PathBuf::from("settings.yml"));
    candidates.push(PathBuf::from("config/settings.yml"));
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("influencer-finder/settings.yml"));
    }

    for path in candidates {
        if path.exists() {
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(LoadedSettings {
                settings,
                path: Some(path),
            });
        }
    }

    let mut settings = Settings::default();
    settings.merge_env();
    Ok(LoadedSettings {
        settings,
        path: None,
    })
}
