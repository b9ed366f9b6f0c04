use crate::domain::model::Coordinate;
use crate::domain::ports::GeolocationSource;
use crate::utils::error::{NearbyError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// 定位只是盡力而為，不能讓搜尋一直等下去
pub const DEFAULT_GEOLOCATION_TIMEOUT: Duration = Duration::from_secs(5);

/// 由命令列直接指定的位置
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinate);

#[async_trait]
impl GeolocationSource for FixedPosition {
    async fn current_position(&self) -> Result<Option<Coordinate>> {
        Ok(Some(self.0).filter(Coordinate::is_valid))
    }
}

/// 沒有定位能力的環境
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

#[async_trait]
impl GeolocationSource for Unavailable {
    async fn current_position(&self) -> Result<Option<Coordinate>> {
        Ok(None)
    }
}

/// 透過 IP 查詢大概位置，回應格式為 `{ "lat": .., "lon": .. }`
#[derive(Debug, Clone)]
pub struct IpGeolocation {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct IpLocationDto {
    lat: Option<f64>,
    lon: Option<f64>,
}

impl IpGeolocation {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_timeout(endpoint, DEFAULT_GEOLOCATION_TIMEOUT)
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl GeolocationSource for IpGeolocation {
    async fn current_position(&self) -> Result<Option<Coordinate>> {
        tracing::debug!("Looking up approximate position via {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        if !response.status().is_success() {
            return Err(NearbyError::GeolocationError {
                message: format!("lookup returned HTTP {}", response.status()),
            });
        }

        let body: IpLocationDto = response.json().await?;
        let position = match (body.lat, body.lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        };
        Ok(position.filter(Coordinate::is_valid))
    }
}

/// 在執行期才決定使用哪一種定位來源
#[derive(Debug, Clone)]
pub enum DeviceLocator {
    Fixed(FixedPosition),
    Ip(IpGeolocation),
    Unavailable(Unavailable),
}

#[async_trait]
impl GeolocationSource for DeviceLocator {
    async fn current_position(&self) -> Result<Option<Coordinate>> {
        match self {
            DeviceLocator::Fixed(source) => source.current_position().await,
            DeviceLocator::Ip(source) => source.current_position().await,
            DeviceLocator::Unavailable(source) => source.current_position().await,
        }
    }
}
