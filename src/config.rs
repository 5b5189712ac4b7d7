//! Runtime configuration.
//!
//! Read from environment variables with defaults for local development:
//! - `HEAT_MAP_URL`: site map page (default `./carte/`)
//! - `HEAT_IRIS_MAP_URL`: external map for IRIS-based addresses
//! - `HEAT_MAP_ZOOM`: zoom level used in map links (default 15)

use crate::error::{EligibilityError, Result};

pub const DEFAULT_MAP_URL: &str = "./carte/";
pub const DEFAULT_IRIS_MAP_URL: &str = "https://carto.viaseva.org/public/viaseva/map/";
pub const DEFAULT_MAP_ZOOM: u8 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub map_url: String,
    pub iris_map_url: String,
    pub map_zoom: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map_url: DEFAULT_MAP_URL.to_string(),
            iris_map_url: DEFAULT_IRIS_MAP_URL.to_string(),
            map_zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

impl AppConfig {
    /// Build from the process environment. A bad zoom value is logged and
    /// replaced by the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, test map, ...).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let map_zoom = match lookup("HEAT_MAP_ZOOM") {
            Some(raw) => parse_zoom(&raw).unwrap_or_else(|e| {
                tracing::warn!("{}; using zoom {}", e, DEFAULT_MAP_ZOOM);
                DEFAULT_MAP_ZOOM
            }),
            None => defaults.map_zoom,
        };

        Self {
            map_url: lookup("HEAT_MAP_URL").unwrap_or(defaults.map_url),
            iris_map_url: lookup("HEAT_IRIS_MAP_URL").unwrap_or(defaults.iris_map_url),
            map_zoom,
        }
    }
}

/// Map zoom levels run from 0 to 22.
fn parse_zoom(raw: &str) -> Result<u8> {
    match raw.trim().parse::<u8>() {
        Ok(zoom) if zoom <= 22 => Ok(zoom),
        _ => Err(EligibilityError::InvalidConfig {
            key: "HEAT_MAP_ZOOM",
            value: raw.to_string(),
        }),
    }
}
