#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::google_places::DEFAULT_PLACES_ENDPOINT;
use crate::core::orchestrator::DEFAULT_SEARCH_RADIUS_METERS;
use crate::domain::model::{Coordinate, ResponseOrdering};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{NearbyError, Result};
use crate::utils::validation::{self, Validate};
use crate::view::theme::{DEFAULT_CONTAINER_ID, DEFAULT_ZOOM};
use std::time::Duration;
use toml_config::TomlConfig;

pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// 合併後的最終設定：預設值 < TOML 檔 < 命令列
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_endpoint: String,
    pub api_key: String,
    pub default_location: Coordinate,
    pub radius_meters: u32,
    pub timeout_seconds: Option<u64>,
    pub geolocation_endpoint: Option<String>,
    pub ordering: ResponseOrdering,
    pub zoom: u8,
    pub container_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_PLACES_ENDPOINT.to_string(),
            api_key: String::new(),
            default_location: Coordinate::DEFAULT,
            radius_meters: DEFAULT_SEARCH_RADIUS_METERS,
            timeout_seconds: None,
            geolocation_endpoint: None,
            ordering: ResponseOrdering::default(),
            zoom: DEFAULT_ZOOM,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(config: TomlConfig) -> Self {
        let defaults = Self::default();
        let default_location = Coordinate::new(
            config
                .location
                .default_latitude
                .unwrap_or(defaults.default_location.latitude),
            config
                .location
                .default_longitude
                .unwrap_or(defaults.default_location.longitude),
        );

        Self {
            api_endpoint: config.provider.endpoint.unwrap_or(defaults.api_endpoint),
            api_key: config.provider.api_key.unwrap_or(defaults.api_key),
            default_location,
            radius_meters: config.search.radius_meters.unwrap_or(defaults.radius_meters),
            timeout_seconds: config.provider.timeout_seconds,
            geolocation_endpoint: config.location.geolocation_endpoint,
            ordering: config.search.ordering.unwrap_or(defaults.ordering),
            zoom: config.map.zoom.unwrap_or(defaults.zoom),
            container_id: config.map.container_id.unwrap_or(defaults.container_id),
        }
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn default_location(&self) -> Coordinate {
        self.default_location
    }

    fn search_radius(&self) -> u32 {
        self.radius_meters
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn geolocation_endpoint(&self) -> Option<&str> {
        self.geolocation_endpoint.as_deref()
    }

    fn response_ordering(&self) -> ResponseOrdering {
        self.ordering
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("provider.endpoint", &self.api_endpoint)?;

        if self.api_key.trim().is_empty() {
            return Err(NearbyError::MissingConfigError {
                field: "provider.api_key".to_string(),
            });
        }
        if self.api_key.contains("${") {
            return Err(NearbyError::InvalidConfigValueError {
                field: "provider.api_key".to_string(),
                value: self.api_key.clone(),
                reason: "Unresolved environment variable".to_string(),
            });
        }

        validation::validate_latitude(
            "location.default_latitude",
            self.default_location.latitude,
        )?;
        validation::validate_longitude(
            "location.default_longitude",
            self.default_location.longitude,
        )?;
        validation::validate_range("search.radius_meters", self.radius_meters, 1, 50_000)?;
        validation::validate_range("map.zoom", self.zoom, 0, 21)?;
        validation::validate_non_empty_string("map.container_id", &self.container_id)?;

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range("provider.timeout_seconds", timeout, 1, 300)?;
        }
        if let Some(endpoint) = &self.geolocation_endpoint {
            validation::validate_url("location.geolocation_endpoint", endpoint)?;
        }

        Ok(())
    }
}
