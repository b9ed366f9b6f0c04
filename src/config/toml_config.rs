use crate::domain::model::ResponseOrdering;
use crate::utils::error::{NearbyError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub provider: ProviderConfig,
    pub location: LocationConfig,
    pub search: SearchConfig,
    pub map: MapConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationConfig {
    pub default_latitude: Option<f64>,
    pub default_longitude: Option<f64>,
    pub geolocation_endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub radius_meters: Option<u32>,
    pub ordering: Option<ResponseOrdering>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapConfig {
    pub zoom: Option<u8>,
    pub container_id: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${GOOGLE_MAPS_API_KEY})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NearbyError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[provider]
endpoint = "https://maps.example.com"
api_key = "abc123"
timeout_seconds = 10

[location]
default_latitude = 37.7749
default_longitude = -122.4194
geolocation_endpoint = "http://ip-api.com/json"

[search]
radius_meters = 1500
ordering = "latest-response"

[map]
zoom = 12
container_id = "nearby-map"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.provider.endpoint.as_deref(), Some("https://maps.example.com"));
        assert_eq!(config.provider.timeout_seconds, Some(10));
        assert_eq!(config.location.default_latitude, Some(37.7749));
        assert_eq!(config.search.radius_meters, Some(1500));
        assert_eq!(config.search.ordering, Some(ResponseOrdering::LatestResponse));
        assert_eq!(config.map.zoom, Some(12));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.provider.endpoint.is_none());
        assert!(config.search.ordering.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMART_NEARBY_TEST_KEY", "from-env");

        let toml_content = r#"
[provider]
api_key = "${SMART_NEARBY_TEST_KEY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.provider.api_key.as_deref(), Some("from-env"));

        std::env::remove_var("SMART_NEARBY_TEST_KEY");
    }

    #[test]
    fn test_missing_env_var_is_left_in_place() {
        let toml_content = r#"
[provider]
api_key = "${SMART_NEARBY_DOES_NOT_EXIST}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.provider.api_key.as_deref(),
            Some("${SMART_NEARBY_DOES_NOT_EXIST}")
        );
    }

    #[test]
    fn test_invalid_ordering_is_rejected() {
        let toml_content = r#"
[search]
ordering = "whatever"
"#;
        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(NearbyError::TomlError(_))
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[map]\nzoom = 15\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.map.zoom, Some(15));
    }
}
