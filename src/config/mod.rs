// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Every value the report pipeline depends on (server URL, fallback
//! coordinate, geolocation timeout) lives here so that no component carries
//! hardcoded endpoints or coordinates.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PawsRescue";

/// Base URL of the PAWS rescue server.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Fallback coordinate used when device geolocation is unavailable or denied
/// (Noida, the original deployment area of the rescue network).
pub const DEFAULT_LAT: f64 = 28.5355;
pub const DEFAULT_LNG: f64 = 77.391;

/// Endpoint queried for a device-position estimate.
pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipapi.co/json/";

/// Bounded wait for the geolocation lookup, in seconds.
pub const DEFAULT_GEOLOCATION_TIMEOUT_SECS: u64 = 10;

/// How long the success banner stays up after a submitted report, in seconds.
pub const DEFAULT_SUCCESS_DISPLAY_SECS: u64 = 5;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub server_url: Option<String>,
    #[serde(default)]
    pub default_lat: Option<f64>,
    #[serde(default)]
    pub default_lng: Option<f64>,
    #[serde(default)]
    pub geolocation_url: Option<String>,
    #[serde(default)]
    pub geolocation_timeout_secs: Option<u64>,
    #[serde(default)]
    pub success_display_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: Some(DEFAULT_SERVER_URL.to_string()),
            default_lat: Some(DEFAULT_LAT),
            default_lng: Some(DEFAULT_LNG),
            geolocation_url: Some(DEFAULT_GEOLOCATION_URL.to_string()),
            geolocation_timeout_secs: Some(DEFAULT_GEOLOCATION_TIMEOUT_SECS),
            success_display_secs: Some(DEFAULT_SUCCESS_DISPLAY_SECS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_server_url() {
        let config = Config {
            server_url: Some("http://rescue.example:9000".to_string()),
            default_lat: Some(12.5),
            default_lng: Some(-3.25),
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.server_url, config.server_url);
        assert_eq!(loaded.default_lat, config.default_lat);
        assert_eq!(loaded.default_lng, config.default_lng);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.server_url, Some(DEFAULT_SERVER_URL.to_string()));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config::default();

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_carries_fallback_coordinate() {
        let config = Config::default();
        assert_eq!(config.default_lat, Some(DEFAULT_LAT));
        assert_eq!(config.default_lng, Some(DEFAULT_LNG));
        assert_eq!(
            config.geolocation_timeout_secs,
            Some(DEFAULT_GEOLOCATION_TIMEOUT_SECS)
        );
    }
}
