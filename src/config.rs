// Page configuration: the Google Maps API key plus a couple of tunables.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

// overrides the build-time key
pub const API_KEY_STORAGE_KEY: &str = "lahaina_gmap_api_key";

const TILESET_ROOT_URL: &str = "https://tile.googleapis.com/v1/3dtiles/root.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    pub log_filter: String,
    pub carousel_interval_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            log_filter: "info".to_string(),
            carousel_interval_ms: 5000,
        }
    }
}

impl AppConfig {
    /// Values baked in at compile time (`LAHAINA_GMAP_API_KEY`, `LAHAINA_LOG`).
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("LAHAINA_GMAP_API_KEY"), option_env!("LAHAINA_LOG"))
    }

    fn from_values(api_key: Option<&str>, log_filter: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_key: normalize_key(api_key),
            log_filter: log_filter
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map_or(defaults.log_filter, str::to_string),
            carousel_interval_ms: defaults.carousel_interval_ms,
        }
    }

    pub fn load() -> Self {
        let mut cfg = Self::from_build_env();
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(API_KEY_STORAGE_KEY) {
                    cfg = cfg.with_api_key_override(Some(&raw));
                }
            }
        }
        cfg
    }

    /// A blank override is ignored.
    pub fn with_api_key_override(mut self, key: Option<&str>) -> Self {
        if let Some(key) = normalize_key(key) {
            debug!("api key taken from localStorage");
            self.api_key = Some(key);
        }
        self
    }

    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or(ConfigError::MissingApiKey)
    }

    pub fn tileset_url(&self) -> Result<String, ConfigError> {
        Ok(format!("{}?key={}", TILESET_ROOT_URL, self.api_key()?))
    }
}

fn normalize_key(key: Option<&str>) -> Option<String> {
    key.map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
}
