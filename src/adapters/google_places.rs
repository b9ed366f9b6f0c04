use crate::domain::model::{
    Coordinate, OpenStatus, Place, SearchRequest, SearchResponse, SearchStatus,
};
use crate::domain::ports::{ConfigProvider, PlacesService};
use crate::utils::error::{NearbyError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_PLACES_ENDPOINT: &str = "https://maps.googleapis.com";
const NEARBY_SEARCH_SEGMENTS: [&str; 5] = ["maps", "api", "place", "nearbysearch", "json"];

/// Google Places Nearby Search 的 HTTP 用戶端
#[derive(Debug, Clone)]
pub struct GooglePlacesClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GooglePlacesClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        match config.request_timeout() {
            Some(timeout) => Self::with_timeout(config.api_endpoint(), config.api_key(), timeout),
            None => Ok(Self::new(config.api_endpoint(), config.api_key())),
        }
    }

    /// 組出完整的查詢網址（含 API key），保留 endpoint 既有的路徑前綴
    pub fn request_url(&self, request: &SearchRequest) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint)?;
        url.path_segments_mut()
            .map_err(|_| NearbyError::InvalidConfigValueError {
                field: "provider.endpoint".to_string(),
                value: self.endpoint.clone(),
                reason: "Endpoint cannot be a base URL".to_string(),
            })?
            .pop_if_empty()
            .extend(NEARBY_SEARCH_SEGMENTS);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("location", &request.location.to_string());
            query.append_pair("radius", &request.radius_meters.to_string());
            // Nearby Search 只接受單一 type
            if let Some(place_type) = request.types.first() {
                query.append_pair("type", place_type);
            }
            if let Some(keyword) = &request.keyword {
                query.append_pair("keyword", keyword);
            }
            query.append_pair("maxprice", &request.max_price_level.value().to_string());
            query.append_pair("key", &self.api_key);
        }

        Ok(url)
    }
}

#[async_trait]
impl PlacesService for GooglePlacesClient {
    async fn nearby_search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let url = self.request_url(request)?;
        tracing::debug!("Making nearby search request to: {}", url.path());

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Places API response status: {}", status);

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NearbyError::ApiStatusError {
                status: status.as_u16(),
                message,
            });
        }

        let body: NearbySearchDto = response.json().await?;
        Ok(body.into_domain())
    }
}

#[derive(Debug, Deserialize)]
struct NearbySearchDto {
    status: SearchStatus,
    #[serde(default)]
    results: Vec<PlaceDto>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceDto {
    place_id: String,
    name: String,
    rating: Option<f64>,
    vicinity: Option<String>,
    formatted_address: Option<String>,
    opening_hours: Option<OpeningHoursDto>,
    geometry: Option<GeometryDto>,
}

#[derive(Debug, Deserialize)]
struct OpeningHoursDto {
    open_now: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct GeometryDto {
    location: LatLngDto,
}

#[derive(Debug, Deserialize)]
struct LatLngDto {
    lat: f64,
    lng: f64,
}

impl NearbySearchDto {
    fn into_domain(self) -> SearchResponse {
        if let Some(message) = &self.error_message {
            tracing::warn!("Places API says: {}", message);
        }
        if !self.status.is_ok() {
            return SearchResponse::failed(self.status);
        }

        let places = self
            .results
            .into_iter()
            .filter_map(PlaceDto::into_domain)
            .collect();
        SearchResponse::ok(places)
    }
}

impl PlaceDto {
    fn into_domain(self) -> Option<Place> {
        let Some(geometry) = self.geometry else {
            tracing::debug!("Skipping place {} without geometry", self.place_id);
            return None;
        };

        Some(Place {
            address: self
                .vicinity
                .or(self.formatted_address)
                .unwrap_or_default(),
            open_status: OpenStatus::from(self.opening_hours.and_then(|h| h.open_now)),
            location: Coordinate::new(geometry.location.lat, geometry.location.lng),
            id: self.place_id,
            name: self.name,
            rating: self.rating,
        })
    }
}
