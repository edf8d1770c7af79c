//! Plugin settings loaded from `~/.config/mapview/config.toml`.
//!
//! The loaded struct is passed explicitly into the fetcher, geocoder,
//! orchestrator and router; nothing reads settings from global state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::MapError;
use crate::geocode::GEOCODE_ENDPOINT;
use crate::request::{MapType, DEFAULT_SIZE, MAX_ZOOM};
use crate::static_map::STATIC_MAP_ENDPOINT;

/// Endpoint overrides (optional `[endpoints]` section). Used for proxies and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default)]
    pub static_map: Option<String>,
    #[serde(default)]
    pub geocode: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapviewConfig {
    /// Google Maps API key. Empty means not configured.
    #[serde(default)]
    pub api_key: String,
    pub default_location: String,
    pub default_zoom: u8,
    /// Settings index: 0 = roadmap, 1 = satellite, 2 = hybrid, 3 = terrain.
    pub default_map_type: usize,
    #[serde(default = "default_image_size")]
    pub image_size: String,
    /// Directory for the displayed map image (None = system temp dir).
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
    /// Base URL used when building menu item links.
    #[serde(default = "default_plugin_url")]
    pub plugin_url: String,
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

fn default_image_size() -> String {
    DEFAULT_SIZE.to_string()
}

fn default_plugin_url() -> String {
    "plugin://plugin.image.googlemaps/".to_string()
}

impl Default for MapviewConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            default_location: "New York, NY".to_string(),
            default_zoom: 12,
            default_map_type: 0,
            image_size: default_image_size(),
            temp_dir: None,
            plugin_url: default_plugin_url(),
            endpoints: EndpointConfig::default(),
        }
    }
}

impl MapviewConfig {
    /// API key, or `MissingApiKey` when blank.
    pub fn api_key(&self) -> Result<&str, MapError> {
        let key = self.api_key.trim();
        if key.is_empty() {
            Err(MapError::MissingApiKey)
        } else {
            Ok(key)
        }
    }

    /// Default map type; an out-of-range index falls back to roadmap.
    pub fn default_map_type(&self) -> MapType {
        MapType::from_index(self.default_map_type).unwrap_or_else(|| {
            tracing::warn!(
                "default_map_type index {} out of range, using roadmap",
                self.default_map_type
            );
            MapType::Roadmap
        })
    }

    /// Default zoom clamped to the valid range.
    pub fn default_zoom(&self) -> u8 {
        self.default_zoom.min(MAX_ZOOM)
    }

    pub fn static_map_endpoint(&self) -> &str {
        self.endpoints
            .static_map
            .as_deref()
            .unwrap_or(STATIC_MAP_ENDPOINT)
    }

    pub fn geocode_endpoint(&self) -> &str {
        self.endpoints.geocode.as_deref().unwrap_or(GEOCODE_ENDPOINT)
    }

    pub fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mapview")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MapviewConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MapviewConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let cfg: MapviewConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
