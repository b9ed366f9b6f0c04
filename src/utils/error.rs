use thiserror::Error;

#[derive(Error, Debug)]
pub enum NearbyError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Places API returned HTTP {status}: {message}")]
    ApiStatusError { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown mood '{name}'")]
    UnknownMoodError { name: String },

    #[error("Geolocation failed: {message}")]
    GeolocationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NearbyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NearbyError::ApiError(_)
            | NearbyError::ApiStatusError { .. }
            | NearbyError::GeolocationError { .. } => ErrorCategory::Network,
            NearbyError::TomlError(_)
            | NearbyError::UrlError(_)
            | NearbyError::ConfigError { .. }
            | NearbyError::MissingConfigError { .. }
            | NearbyError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            NearbyError::UnknownMoodError { .. } => ErrorCategory::Input,
            NearbyError::IoError(_) | NearbyError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 定位失敗只會退回預設座標
            NearbyError::GeolocationError { .. } => ErrorSeverity::Low,
            NearbyError::ApiError(_) | NearbyError::ApiStatusError { .. } => ErrorSeverity::Medium,
            NearbyError::TomlError(_)
            | NearbyError::UrlError(_)
            | NearbyError::ConfigError { .. }
            | NearbyError::MissingConfigError { .. }
            | NearbyError::InvalidConfigValueError { .. }
            | NearbyError::UnknownMoodError { .. } => ErrorSeverity::High,
            NearbyError::IoError(_) | NearbyError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            NearbyError::ApiError(_) => {
                "Check your network connection and the places endpoint".to_string()
            }
            NearbyError::ApiStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check that the API key is valid and the Places API is enabled".to_string()
            }
            NearbyError::ApiStatusError { .. } => "Retry the search in a moment".to_string(),
            NearbyError::TomlError(_) => "Make sure the config file is valid TOML".to_string(),
            NearbyError::UrlError(_) => "Use a full http(s) URL for the endpoint".to_string(),
            NearbyError::ConfigError { .. } => "Review the configuration file".to_string(),
            NearbyError::MissingConfigError { field } => {
                format!("Set '{}' in the config file or on the command line", field)
            }
            NearbyError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
            NearbyError::UnknownMoodError { .. } => {
                "Pick one of: Work, Date, Quick, Cheap".to_string()
            }
            NearbyError::GeolocationError { .. } => {
                "Pass --lat and --lng to set the search origin explicitly".to_string()
            }
            NearbyError::IoError(_) => "Check file paths and permissions".to_string(),
            NearbyError::SerializationError(_) => "Report this as a bug".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the places service: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::System => format!("Unexpected system error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, NearbyError>;
