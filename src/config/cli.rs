use crate::config::toml_config::TomlConfig;
use crate::config::{Settings, API_KEY_ENV};
use crate::domain::model::{Coordinate, Mood, ResponseOrdering};
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "smart-nearby")]
#[command(about = "Pick a mood, find matching places nearby")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Mood to search for (Work, Date, Quick, Cheap)
    #[arg(short, long)]
    pub mood: Option<Mood>,

    /// Device latitude; used together with --lng
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Device longitude; used together with --lat
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Places API base URL
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Search radius in meters
    #[arg(long)]
    pub radius: Option<u32>,

    #[arg(long, value_enum)]
    pub ordering: Option<ResponseOrdering>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the rendered page to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliArgs {
    pub fn device_position(&self) -> Option<Coordinate> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
            _ => None,
        }
    }

    /// 載入設定檔（如果有）並套用命令列覆蓋
    pub fn load_settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_toml(TomlConfig::from_file(path)?),
            None => Settings::default(),
        };
        self.apply_overrides(&mut settings);
        Ok(settings)
    }

    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(endpoint) = &self.endpoint {
            settings.api_endpoint = endpoint.clone();
        }
        if let Some(api_key) = &self.api_key {
            settings.api_key = api_key.clone();
        }
        if let Some(radius) = self.radius {
            settings.radius_meters = radius;
        }
        if let Some(ordering) = self.ordering {
            settings.ordering = ordering;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_args() {
        let args = CliArgs::try_parse_from([
            "smart-nearby",
            "--mood",
            "cheap",
            "--lat",
            "37.7749",
            "--lng",
            "-122.4194",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(args.mood, Some(Mood::Cheap));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(
            args.device_position(),
            Some(Coordinate::new(37.7749, -122.4194))
        );
    }

    #[test]
    fn test_lat_requires_lng() {
        assert!(CliArgs::try_parse_from(["smart-nearby", "--lat", "1.0"]).is_err());
    }

    #[test]
    fn test_unknown_mood_is_rejected() {
        assert!(CliArgs::try_parse_from(["smart-nearby", "--mood", "sleepy"]).is_err());
    }

    #[test]
    fn test_overrides_win_over_settings() {
        let args = CliArgs::try_parse_from([
            "smart-nearby",
            "--endpoint",
            "http://localhost:9000",
            "--api-key",
            "cli-key",
            "--radius",
            "500",
            "--ordering",
            "latest-response",
        ])
        .unwrap();

        let mut settings = Settings::default();
        args.apply_overrides(&mut settings);

        assert_eq!(settings.api_endpoint, "http://localhost:9000");
        assert_eq!(settings.api_key, "cli-key");
        assert_eq!(settings.radius_meters, 500);
        assert_eq!(settings.ordering, ResponseOrdering::LatestResponse);
    }
}
