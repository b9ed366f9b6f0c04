use crate::utils::error::{NearbyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// 紐約市政廳，定位成功前的搜尋原點
    pub const DEFAULT: Coordinate = Coordinate {
        latitude: 40.7128,
        longitude: -74.0060,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mood {
    Work,
    Date,
    Quick,
    Cheap,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Work, Mood::Date, Mood::Quick, Mood::Cheap];

    pub fn name(&self) -> &'static str {
        match self {
            Mood::Work => "Work",
            Mood::Date => "Date",
            Mood::Quick => "Quick",
            Mood::Cheap => "Cheap",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = NearbyError;

    fn from_str(s: &str) -> Result<Self> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NearbyError::UnknownMoodError {
                name: s.to_string(),
            })
    }
}

/// 價位等級 0..=4，與地點服務的 `maxprice` 參數對應
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PriceLevel(u8);

impl PriceLevel {
    pub const CHEAP: PriceLevel = PriceLevel(1);
    pub const MAX: PriceLevel = PriceLevel(4);

    pub fn new(level: u8) -> Result<Self> {
        if level > Self::MAX.0 {
            return Err(NearbyError::InvalidConfigValueError {
                field: "max_price_level".to_string(),
                value: level.to_string(),
                reason: "Price level must be between 0 and 4".to_string(),
            });
        }
        Ok(Self(level))
    }

    pub const fn value(&self) -> u8 {
        self.0
    }
}

/// 搜尋設定，不含任何顯示用資訊
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodConfig {
    pub category: &'static str,
    pub keyword: Option<&'static str>,
    pub max_price_tier: Option<PriceLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenStatus {
    Open,
    Closed,
    Unknown,
}

impl From<Option<bool>> for OpenStatus {
    fn from(open_now: Option<bool>) -> Self {
        match open_now {
            Some(true) => OpenStatus::Open,
            Some(false) => OpenStatus::Closed,
            None => OpenStatus::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub rating: Option<f64>,
    pub address: String,
    pub open_status: OpenStatus,
    pub location: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub location: Coordinate,
    pub radius_meters: u32,
    pub types: Vec<String>,
    pub keyword: Option<String>,
    pub max_price_level: PriceLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchStatus {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    NotFound,
    UnknownError,
    #[serde(other)]
    Other,
}

impl SearchStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, SearchStatus::Ok)
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchStatus::Ok => "OK",
            SearchStatus::ZeroResults => "ZERO_RESULTS",
            SearchStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            SearchStatus::RequestDenied => "REQUEST_DENIED",
            SearchStatus::InvalidRequest => "INVALID_REQUEST",
            SearchStatus::NotFound => "NOT_FOUND",
            SearchStatus::UnknownError => "UNKNOWN_ERROR",
            SearchStatus::Other => "OTHER",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub status: SearchStatus,
    pub places: Vec<Place>,
}

impl SearchResponse {
    pub fn ok(places: Vec<Place>) -> Self {
        Self {
            status: SearchStatus::Ok,
            places,
        }
    }

    pub fn failed(status: SearchStatus) -> Self {
        Self {
            status,
            places: Vec::new(),
        }
    }
}

/// 多個搜尋同時進行時，哪一個回應決定最終畫面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ResponseOrdering {
    /// 最後發出的搜尋勝出，較舊的回應直接丟棄
    #[default]
    LatestRequest,
    /// 最後抵達的回應勝出，舊回應可能覆蓋新結果
    LatestResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerAnimation {
    Drop,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: Coordinate,
    pub title: String,
    pub animation: MarkerAnimation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MarkerHandle(pub u64);

/// 地圖初始化參數
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOptions {
    pub container_id: String,
    pub center: Coordinate,
    pub zoom: u8,
    pub styles: serde_json::Value,
    pub disable_default_ui: bool,
}
