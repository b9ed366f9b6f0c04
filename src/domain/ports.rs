use crate::domain::model::{
    Coordinate, MapOptions, MarkerHandle, MarkerSpec, ResponseOrdering, SearchRequest,
    SearchResponse,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 外部地點搜尋服務
#[async_trait]
pub trait PlacesService: Send + Sync {
    async fn nearby_search(&self, request: &SearchRequest) -> Result<SearchResponse>;
}

/// 裝置定位來源；`Ok(None)` 表示不支援或未授權
#[async_trait]
pub trait GeolocationSource: Send + Sync {
    async fn current_position(&self) -> Result<Option<Coordinate>>;
}

/// 地圖元件。只由控制器持有，不跨執行緒共享
pub trait MapView: Send {
    fn mount(&mut self, options: &MapOptions);
    fn set_center(&mut self, center: Coordinate);
    fn add_marker(&mut self, marker: &MarkerSpec) -> MarkerHandle;
    fn remove_marker(&mut self, handle: MarkerHandle);
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn default_location(&self) -> Coordinate;
    fn search_radius(&self) -> u32;
    fn request_timeout(&self) -> Option<Duration>;
    fn geolocation_endpoint(&self) -> Option<&str>;
    fn response_ordering(&self) -> ResponseOrdering;
}
